use std::io::{self, BufRead, Write};

/// Asks a yes/no question; anything but an explicit yes (including EOF) is a no.
pub(super) fn prompt_yesno<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(out, "{} [y/N] ", question)?;
    out.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answer: &str) -> (bool, String) {
        let mut input = Cursor::new(answer.as_bytes().to_vec());
        let mut out = Vec::new();
        let yes = prompt_yesno(&mut input, &mut out, "Delete all notes?").unwrap();
        (yes, String::from_utf8(out).unwrap())
    }

    #[test]
    fn accepts_yes_variants() {
        assert!(ask("y\n").0);
        assert!(ask("Y\n").0);
        assert!(ask("  yes \n").0);
    }

    #[test]
    fn everything_else_is_no() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("sure\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn shows_question() {
        assert!(ask("n\n").1.starts_with("Delete all notes? [y/N] "));
    }
}
