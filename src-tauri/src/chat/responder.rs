use super::history::ChatMessage;

pub const DEFAULT_GREETING: &str = "Hello! I'm your AI House Design Assistant. I can help you explore design variations, answer questions about costs, suggest improvements, and guide you through the entire design process. What would you like to know?";

pub const SCRIPTED_REPLY: &str = "Based on your requirements, I've analyzed several options. Adding solar panels would increase initial costs by $25,000 but would save approximately $2,500 annually on energy bills. The ROI period would be about 10 years. Would you like me to update your design with this enhancement?";

pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "What if I increase my budget to $700k?",
    "Can we add solar panels to the design?",
    "How can I make it more energy efficient?",
    "What's the best layout for a home office?",
];

/// Produces the assistant's side of a turn.
pub trait ChatResponder: Send + Sync + 'static {
    /// `history` is the log as it stood right after `prompt` was appended,
    /// ending with the prompt itself.
    fn reply(&self, prompt: &str, history: &[ChatMessage]) -> String;
}

/// Answers every prompt with the same canned analysis.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    reply: String,
}

impl ScriptedResponder {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for ScriptedResponder {
    fn default() -> Self {
        Self::new(SCRIPTED_REPLY)
    }
}

impl ChatResponder for ScriptedResponder {
    fn reply(&self, _prompt: &str, _history: &[ChatMessage]) -> String {
        self.reply.clone()
    }
}
