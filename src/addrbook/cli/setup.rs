use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

/// `0.1.0` for tagged releases, `0.1.0@abc1234 2024-01-15 14:30` otherwise.
fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();

    VERSION.get_or_init(|| {
        let base = env!("CARGO_PKG_VERSION");
        let hash = env!("GIT_HASH");
        if env!("IS_RELEASE") == "true" || hash.is_empty() {
            base.to_string()
        } else {
            format!("{}@{} {}", base, hash, env!("GIT_COMMIT_DATE"))
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "addrbook", bin_name = "addrbook", version = get_version())]
#[command(about = "Keep your contacts: phones, emails and birthdays", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the address book and config (default: $ADDRBOOK_HOME or the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a contact (replaces a contact with the same name)
    #[command(alias = "a")]
    Add {
        /// Contact name
        name: String,

        /// Phone number, 12 digits (repeatable)
        #[arg(short, long = "phone", value_name = "PHONE")]
        phones: Vec<String>,

        /// Email address (repeatable)
        #[arg(short, long = "email", value_name = "EMAIL")]
        emails: Vec<String>,

        /// Birthday as DD.MM.YYYY
        #[arg(short, long)]
        birthday: Option<String>,
    },

    /// Add, change or delete a contact's phones
    #[command(subcommand)]
    Phone(PhoneCommands),

    /// Add, change or delete a contact's emails
    #[command(subcommand)]
    Email(EmailCommands),

    /// Set or clear a contact's birthday
    #[command(subcommand)]
    Birthday(BirthdayCommands),

    /// Show one or more contacts in full
    #[command(alias = "v")]
    Show {
        /// Contact names
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// List contacts page by page
    #[command(alias = "ls")]
    List {
        /// Contacts per page (default from config)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Search names, emails and phones (interactive without a query)
    #[command(alias = "s")]
    Search {
        /// Text to look for
        query: Option<String>,
    },

    /// Remove one or more contacts
    #[command(alias = "rm")]
    Remove {
        /// Contact names
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Import contacts from a JSON file
    Import {
        /// File holding an array of {name, phones, emails, birthday} objects
        file: PathBuf,
    },

    /// List birthdays coming up soon
    Birthdays {
        /// How many days ahead to look
        #[arg(short, long, default_value_t = 7)]
        days: i64,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the address book file
    Path,
}

#[derive(Subcommand, Debug)]
pub enum PhoneCommands {
    /// Add a phone to a contact
    Add { name: String, phone: String },
    /// Replace a contact's phone
    Edit {
        name: String,
        old: String,
        new: String,
    },
    /// Delete a contact's phone
    #[command(alias = "rm")]
    Delete { name: String, phone: String },
}

#[derive(Subcommand, Debug)]
pub enum EmailCommands {
    /// Add an email to a contact
    Add { name: String, email: String },
    /// Replace a contact's email
    Edit {
        name: String,
        old: String,
        new: String,
    },
    /// Delete a contact's email
    #[command(alias = "rm")]
    Delete { name: String, email: String },
}

#[derive(Subcommand, Debug)]
pub enum BirthdayCommands {
    /// Set a contact's birthday (DD.MM.YYYY)
    Set { name: String, date: String },
    /// Remove a contact's birthday
    Clear { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_repeated_fields() {
        let cli = Cli::try_parse_from([
            "addrbook",
            "add",
            "Andrew",
            "-p",
            "380671234455",
            "--phone",
            "380503216677",
            "-e",
            "andrew@gmail.com",
            "-b",
            "18.08.2003",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add {
                name,
                phones,
                emails,
                birthday,
            }) => {
                assert_eq!(name, "Andrew");
                assert_eq!(phones, vec!["380671234455", "380503216677"]);
                assert_eq!(emails, vec!["andrew@gmail.com"]);
                assert_eq!(birthday.as_deref(), Some("18.08.2003"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_nested_phone_edit() {
        let cli = Cli::try_parse_from([
            "addrbook",
            "phone",
            "edit",
            "Olga",
            "380933458790",
            "380933458791",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Phone(PhoneCommands::Edit { .. }))
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["addrbook", "list", "--home", "/tmp/x", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/x")));
    }

    #[test]
    fn no_command_is_allowed() {
        let cli = Cli::try_parse_from(["addrbook"]).unwrap();
        assert!(cli.command.is_none());
    }
}
