use array_drills::input::{self, Error};
use array_drills::{
    checked_sum, common_elements, deduplicate, deduplicate_timed, filter_even, occurrence_table,
    reverse, reverse_in_place, reverse_recursive, rotate, sum,
};
use clap::{Args, Parser, Subcommand};
use std::fmt::Debug;

const DEMO_FRUIT: [&str; 20] = [
    "apple", "banana", "orange", "grape", "apple", "peach", "pear", "banana", "kiwi", "mango",
    "pineapple", "peach", "plum", "apple", "watermelon", "banana", "blueberry", "strawberry",
    "orange", "kiwi",
];

/// Options parsed from the command line. Each subcommand runs one exercise.
#[derive(Parser, Debug)]
#[clap(about = "Small array exercises: rotate, reverse, count, dedup and friends")]
struct CmdOptions {
    #[clap(short, long, help = "Log debug output (overridden by RUST_LOG)")]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

/// The sequence an exercise runs on.
#[derive(Args, Debug)]
struct ListArg {
    #[clap(help = "Comma-separated list of elements, e.g. 1,2,3")]
    list: Option<String>,
    #[clap(
        long,
        value_name = "LEN",
        conflicts_with = "list",
        help = "Use LEN random integers instead of a list"
    )]
    random: Option<usize>,
}

impl ListArg {
    fn strings(&self) -> Result<Vec<String>, Error> {
        input::resolve_sequence(self.list.as_deref(), self.random)
    }

    fn numbers(&self) -> Result<Vec<i64>, Error> {
        input::resolve_numbers(self.list.as_deref(), self.random)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    #[clap(about = "Rotate the list left by N positions")]
    Rotate {
        #[clap(flatten)]
        input: ListArg,
        #[clap(
            short,
            long,
            allow_negative_numbers = true,
            help = "Positions to rotate by; negative rotates right"
        )]
        shift: i64,
    },
    #[clap(about = "Reverse the list")]
    Reverse {
        #[clap(flatten)]
        input: ListArg,
        #[clap(long, help = "Use the recursive in-place reversal")]
        recursive: bool,
    },
    #[clap(about = "Elements of the list that also appear in OTHER")]
    Common {
        #[clap(flatten)]
        input: ListArg,
        #[clap(long, help = "Comma-separated list to compare against")]
        other: String,
    },
    #[clap(about = "Count occurrences of each element")]
    Count {
        #[clap(flatten)]
        input: ListArg,
    },
    #[clap(about = "Remove duplicates, keeping first occurrences")]
    Dedup {
        #[clap(flatten)]
        input: ListArg,
        #[clap(long, help = "Also print how long deduplication took")]
        timed: bool,
    },
    #[clap(about = "Keep only even integers")]
    Evens {
        #[clap(flatten)]
        input: ListArg,
    },
    #[clap(about = "Sum a list of integers")]
    Sum {
        #[clap(flatten)]
        input: ListArg,
    },
    #[clap(about = "Run every exercise on built-in sample data")]
    Demo,
}

fn format_table<T: Debug>(table: &[(T, usize)]) -> String {
    let entries: Vec<String> = table
        .iter()
        .map(|(elem, count)| format!("{:?}: {}", elem, count))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Rotate { input, shift } => {
            let list = input.strings()?;
            log::debug!("rotate {:?} by {}", list, shift);
            println!("{:?}", rotate(&list, shift));
        }
        Command::Reverse { input, recursive } => {
            let mut list = input.strings()?;
            log::debug!("reverse {:?} (recursive: {})", list, recursive);
            if recursive {
                reverse_recursive(&mut list);
            } else {
                reverse_in_place(&mut list);
            }
            println!("{:?}", list);
        }
        Command::Common { input, other } => {
            let list = input.strings()?;
            let other = array_drills::input::parse_sequence(&other);
            log::debug!("common elements of {:?} and {:?}", list, other);
            println!("{:?}", common_elements(&list, &other));
        }
        Command::Count { input } => {
            let list = input.strings()?;
            log::debug!("count occurrences in {:?}", list);
            println!("{}", format_table(&occurrence_table(&list)));
        }
        Command::Dedup { input, timed } => {
            let list = input.strings()?;
            log::debug!("deduplicate {} elements", list.len());
            if timed {
                let unique = deduplicate_timed(&list, |elapsed| {
                    log::info!("deduplicated {} elements in {:?}", list.len(), elapsed);
                    println!("time taken: {:?}", elapsed);
                });
                println!("{:?}", unique);
            } else {
                println!("{:?}", deduplicate(&list));
            }
        }
        Command::Evens { input } => {
            let numbers = input.numbers()?;
            log::debug!("filter evens from {:?}", numbers);
            println!("{:?}", filter_even(&numbers));
        }
        Command::Sum { input } => {
            let numbers = input.numbers()?;
            log::debug!("sum {:?}", numbers);
            let total = checked_sum(&numbers).ok_or(Error::Overflow)?;
            println!("{}", total);
        }
        Command::Demo => run_demo(),
    }
    Ok(())
}

fn run_demo() {
    let word = vec!['r', 'e', 'v', 'e', 'r', 's', 'e'];
    println!("original: {:?}", word);
    println!("reversed: {:?}", reverse(&word));

    println!("rotated by 2: {:?}", rotate(&[1, 2, 3, 4, 5], 2));
    println!(
        "common elements: {:?}",
        common_elements(&[1, 2, 3, 4], &[2, 1, 4, 3, 5, 6, 7])
    );
    println!(
        "occurrences: {}",
        format_table(&occurrence_table(&["a", "b", "a", "c", "b"]))
    );
    println!("unique fruit: {:?}", deduplicate(&DEMO_FRUIT));

    let numbers: Vec<i64> = (1..=9).collect();
    println!("even numbers: {:?}", filter_even(&numbers));
    println!("sum of elements: {}", sum(&numbers[..5]));
}

fn main() {
    let parsed = CmdOptions::try_parse();
    let verbose = matches!(&parsed, Ok(options) if options.verbose);

    // RUST_LOG wins; otherwise --verbose picks debug and the default is warn.
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", if verbose { "debug" } else { "warn" });
    }
    pretty_env_logger::init();

    let options = match parsed {
        Ok(options) => options,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = run(options.command) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
