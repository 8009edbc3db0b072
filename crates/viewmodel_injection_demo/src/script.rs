use derive_more::{Display, Error};

/// One interaction with the counter screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Step {
    #[display(fmt = "+")]
    Increment,
    #[display(fmt = "-")]
    Decrement,
}

#[derive(Clone, PartialEq, Eq, Debug, Display, Error)]
pub enum ScriptError {
    #[display(fmt = "unknown step {:?} at position {}", step, position)]
    UnknownStep { position: usize, step: char },
}

/// Parses a tap script. `position` in errors counts characters from zero,
/// whitespace included.
pub fn parse(script: &str) -> Result<Vec<Step>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, step)| !step.is_whitespace())
        .map(|(position, step)| match step {
            '+' => Ok(Step::Increment),
            '-' => Ok(Step::Decrement),
            step => Err(ScriptError::UnknownStep { position, step }),
        })
        .collect()
}
