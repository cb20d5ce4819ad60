use std::io::{self, BufRead, Write};

/// Accepted answers, compared after trimming and lowercasing.
const AFFIRMATIVE: &[&str] = &["y", "yes", "có"];

pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    AFFIRMATIVE.contains(&answer.as_str())
}

/// Ask a yes/no question. Anything but an affirmative answer, including EOF, is a no.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(output, "{} (y/n): ", question)?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}
