// Resume analysis prompt construction.
// The headings requested here are the ones the section parser and icon table expect.

const REVIEWER_PREAMBLE: &str = "\
You are an expert career coach, ATS (Applicant Tracking System) specialist, \
and professional resume reviewer.  Analyse the resume provided and return \
a detailed, actionable report using the EXACT section headings below.\n\n";

const KEY_STRENGTHS: &str = "\
## Key Strengths\n\
List the candidate's most compelling strengths, achievements, and skills.\n\n";

const SKILL_GAPS: &str = "\
## Skill Gaps\n\
Identify missing or weak skills relative to modern industry expectations";

const SKILL_GAPS_JD_SUFFIX: &str = " and the provided job description";

const ATS_SUGGESTIONS: &str = ".\n\n\
## ATS Optimisation Suggestions\n\
Provide concrete tips to improve ATS compatibility: keyword usage, \
formatting, section ordering, and quantifiable achievements.\n\n";

const MATCH_PERCENTAGE: &str = "\
## Match Percentage\n\
Estimate how well the resume matches the job description as a \
percentage (0-100%).  Briefly justify the score.\n\n";

const OVERALL_SUMMARY: &str = "\
## Overall Summary\n\
Wrap up with a concise overall assessment and top three recommended \
next steps for the candidate.\n\n\
IMPORTANT: Use the exact section headings listed above (prefixed with ##). \
Use bullet points for lists.  Be specific, not generic.";

/// Builds the system prompt. Job-match instructions are only included when
/// `job_description` has content after trimming.
pub fn build_system_prompt(job_description: &str) -> String {
    let has_jd = has_job_description(job_description);

    let mut prompt = String::from(REVIEWER_PREAMBLE);
    prompt.push_str(KEY_STRENGTHS);
    prompt.push_str(SKILL_GAPS);
    if has_jd {
        prompt.push_str(SKILL_GAPS_JD_SUFFIX);
    }
    prompt.push_str(ATS_SUGGESTIONS);
    if has_jd {
        prompt.push_str(MATCH_PERCENTAGE);
    }
    prompt.push_str(OVERALL_SUMMARY);
    prompt
}

/// Builds the user message carrying the resume and, if present, the job description.
pub fn build_user_message(resume_text: &str, job_description: &str) -> String {
    let mut message = format!("### RESUME\n\n{resume_text}");
    if has_job_description(job_description) {
        message.push_str(&format!("\n\n### JOB DESCRIPTION\n\n{job_description}"));
    }
    message
}

fn has_job_description(job_description: &str) -> bool {
    !job_description.trim().is_empty()
}
