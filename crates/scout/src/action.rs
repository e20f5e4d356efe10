use scout_model::ModelMessage;

/// Parses a ReAct-style action, `ToolName[input]`.
///
/// The tool name must be a non-empty run of ASCII letters, digits or
/// underscores. Everything between the first `[` and the final `]` is the
/// input, kept verbatim. Surrounding whitespace of the whole line is
/// ignored.
pub fn parse_action(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (name, rest) = line.split_once('[')?;
    let input = rest.strip_suffix(']')?;
    let is_valid_name = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if !is_valid_name {
        return None;
    }
    Some((name, input))
}

/// Wraps a tool observation into a message that can be appended to the
/// conversation.
///
/// The observation is sent as a user message: without a preceding
/// `tool_calls` reply, OpenAI-compatible servers reject `tool` messages.
pub fn observation_message(name: &str, observation: &str) -> ModelMessage {
    ModelMessage::user(format!("Observation from {name}: {observation}"))
}
