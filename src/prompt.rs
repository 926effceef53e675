use std::io::{self, BufRead, Write};

/// Parse a yes/no answer, `None` when it is neither
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Ask whether part `part` of the program, called `title`, should run.
///
/// Keeps asking until the answer is yes or no. End of input counts as no.
pub fn define_part<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    part: u32,
    title: &str,
) -> io::Result<bool> {
    loop {
        write!(output, "Part {}: {}. Run it? [y/n]: ", part, title)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }
        match parse_answer(&line) {
            Some(answer) => return Ok(answer),
            None => writeln!(output, "Please answer y or n.")?,
        }
    }
}
