use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notez", bin_name = "notez", version)]
#[command(about = "A small, durable note list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a note
    #[command(alias = "a")]
    Add {
        /// Text of the note (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// List notes, newest first
    #[command(alias = "ls")]
    List,

    /// Replace the text of a note
    #[command(alias = "e")]
    Edit {
        /// Index of the note (e.g. 1) or its id (e.g. @1700000000000)
        index: String,

        /// New text of the note
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete one or more notes
    #[command(alias = "rm")]
    Delete {
        /// Indexes of the notes (e.g. 1 3 5, 2-4, @1700000000000)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete all notes
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive session: type a line and press Enter to add it
    #[command(alias = "sh")]
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the notes file
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("notez").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn bare_invocation_has_no_command() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn add_collects_words() {
        match parse(&["add", "Buy", "milk"]).command {
            Some(Commands::Add { text }) => assert_eq!(text, vec!["Buy", "milk"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn edit_takes_index_then_text() {
        match parse(&["e", "2", "new", "text"]).command {
            Some(Commands::Edit { index, text }) => {
                assert_eq!(index, "2");
                assert_eq!(text, vec!["new", "text"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn delete_requires_an_index() {
        assert!(Cli::try_parse_from(["notez", "delete"]).is_err());
    }

    #[test]
    fn clear_yes_flag() {
        match parse(&["clear", "-y"]).command {
            Some(Commands::Clear { yes }) => assert!(yes),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn verbose_is_global() {
        assert!(parse(&["ls", "--verbose"]).verbose);
    }
}
