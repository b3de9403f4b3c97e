use clap::{Args, Parser as ClapParser, Subcommand};
use juery::cli::{self, CliError, Command, RunOptions, RunOutput};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "juery")]
#[command(about = "juery - Find every location in a JSON document whose key path matches a pattern")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// JSON input (reads from stdin if not provided)
    #[arg(short, long)]
    input: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,

    /// Print only the matched values
    #[arg(long)]
    values_only: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find locations whose path matches the pattern tokens (prefix a token with ^ to anchor it)
    Query {
        /// Pattern tokens, e.g. `users ^name` (put tokens starting with `-` after `--`)
        tokens: Vec<String>,

        /// Only print the first match (or null)
        #[arg(long)]
        first: bool,

        #[command(flatten)]
        args: InputArgs,
    },

    /// Find locations whose key contains any keyword (case-insensitive)
    Keys {
        /// Keywords to look for
        #[arg(required = true)]
        keywords: Vec<String>,

        #[command(flatten)]
        args: InputArgs,
    },

    /// Find string/number values containing any keyword (case-insensitive)
    Values {
        /// Keywords to look for
        #[arg(required = true)]
        keywords: Vec<String>,

        #[command(flatten)]
        args: InputArgs,
    },

    /// List every location in visiting order
    Paths {
        #[command(flatten)]
        args: InputArgs,
    },

    /// List documentation topics
    Docs,

    /// Show documentation for a specific topic
    Doc {
        /// Topic name (use 'juery docs' to list topics)
        topic: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            tokens,
            first,
            args,
        } => run(Command::Query { tokens, first }, args),
        Commands::Keys { keywords, args } => run(Command::Keys(keywords), args),
        Commands::Values { keywords, args } => run(Command::Values(keywords), args),
        Commands::Paths { args } => run(Command::Paths, args),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { topic } => cli::get_doc_topic(&topic).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(command: Command, args: InputArgs) -> Result<(), CliError> {
    let input = match args.input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = RunOptions {
        command,
        input,
        pretty: args.pretty,
        values_only: args.values_only,
    };

    match cli::execute(&options)? {
        RunOutput::Records(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        RunOutput::First(Some(line)) => println!("{}", line),
        RunOutput::First(None) => println!("null"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_query(argv: &[&str]) -> (Vec<String>, bool, InputArgs) {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Query {
                tokens,
                first,
                args,
            } => (tokens, first, args),
            _ => panic!("expected query subcommand"),
        }
    }

    #[test]
    fn test_flags_after_tokens_are_not_tokens() {
        let (tokens, first, args) =
            parse_query(&["juery", "query", "a", "--first", "-i", "{}", "-p", "--values-only"]);

        assert_eq!(tokens, ["a"]);
        assert!(first);
        assert_eq!(args.input.as_deref(), Some("{}"));
        assert!(args.pretty);
        assert!(args.values_only);
    }

    #[test]
    fn test_flags_before_tokens() {
        let (tokens, first, args) = parse_query(&["juery", "query", "--first", "-i", "{}", "a", "^b"]);

        assert_eq!(tokens, ["a", "^b"]);
        assert!(first);
        assert_eq!(args.input.as_deref(), Some("{}"));
    }

    #[test]
    fn test_dash_tokens_after_separator() {
        let (tokens, first, _) = parse_query(&["juery", "query", "--", "-x", "^-y"]);

        assert_eq!(tokens, ["-x", "^-y"]);
        assert!(!first);
    }

    #[test]
    fn test_keywords_require_a_value() {
        assert!(Cli::try_parse_from(["juery", "keys"]).is_err());
        assert!(Cli::try_parse_from(["juery", "values", "x", "-i", "{}"]).is_ok());
    }
}
