use super::Task;

/// Wraps `text` in the instructions for `task`. Without a task the text is
/// sent as the prompt itself.
pub fn build_prompt(task: Option<Task>, text: &str) -> String {
    let Some(task) = task else {
        return text.to_string();
    };

    match task {
        Task::Simplify => format!(
            "You are a legal assistant. Your task is to simplify the following legal text \
             into plain language so that an ordinary person can understand it. Do not remove \
             any important meaning, but make it easy to read and clear.\n\nText:\n{text}"
        ),
        Task::Chat => format!(
            "You are a helpful legal assistant. Answer the following legal question in simple, \
             understandable terms.\n\n\
             Provide:\n\
             1. A direct answer to the question\n\
             2. Important considerations or exceptions\n\
             3. When to seek professional legal help\n\n\
             Remember to:\n\
             - Use plain English\n\
             - Avoid legal jargon\n\
             - Be helpful but remind users this is not formal legal advice\n\n\
             User Question: {text}"
        ),
        Task::Scenario => format!(
            "You are a legal analyst. Analyze the following scenario and provide:\n\n\
             1. A clear explanation of the legal situation\n\
             2. Potential risks and consequences\n\
             3. Rights and protections available\n\
             4. Recommended next steps\n\
             5. When immediate legal help is needed\n\n\
             Please provide practical, actionable advice in plain English.\n\n\
             Scenario: {text}"
        ),
        Task::Summary => format!(
            "You are a legal summarizer. Read the following legal document and provide a clear \
             and concise summary. Focus on the essential points, obligations, and rights.\
             \n\nText:\n{text}"
        ),
        Task::KeyPoints => format!(
            "Extract the most important key points from the following legal text. Present them \
             as bullet points that are easy to read and understand. Do not miss any crucial \
             obligations or rights.\n\nText:\n{text}"
        ),
        Task::CaseReference => format!(
            "Analyze the following legal matter and suggest relevant case law or precedents \
             that may apply. Provide proper context but do not invent false cases.\
             \n\nText:\n{text}"
        ),
        Task::Actions => format!(
            "Based on the following legal issue, provide practical and actionable next steps a \
             person can take. Make sure the advice is general (not jurisdiction-specific), \
             simple, and responsible.\n\nText:\n{text}"
        ),
    }
}
