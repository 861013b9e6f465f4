// Model prompt templates for interview question generation and follow-up chat.
// Shared fragments live in llm_client::prompts.

/// One prompt per skill. Replace: {skill}
pub const TECH_QUESTIONS_TEMPLATE: &str = "\
Based on the candidate's experience and skills in {skill}, generate 3-5 technical questions.
Questions should test proficiency, practical experience, and problem-solving skills for {skill}.";

/// Replace: {name}, {tech_stack}, {resume_text}
pub const RESUME_QUESTIONS_TEMPLATE: &str = "\
Based on the resume of {name}, generate personalized questions that probe into the candidate's \
experience with projects, skills, and work history.
The candidate has experience in the following tech stack: {tech_stack}.
Resume content:
{resume_text}";

/// Replace: {name}, {position}
pub const ROLE_QUESTIONS_TEMPLATE: &str = "\
Based on the position {position} that the candidate, {name}, is applying for, generate 5-7 interview questions.
These questions should test the candidate's understanding of the core responsibilities and skills \
required for the {position} role.";

/// Replace: {persona}, {message}, {name}, {location}, {qualification}, {college_name}
pub const CHAT_REPLY_TEMPLATE: &str = "\
{persona} Respond to the following user input: {message}.
Use candidate details like name ({name}), location ({location}), qualification ({qualification}),
and college ({college_name}) naturally during the response.";
