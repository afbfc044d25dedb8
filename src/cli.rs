use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a CSV file with `ingredient,quantity,unit` columns
    #[arg(short, long)]
    pub entries_file: String,

    /// Print the shopping list as JSON
    #[arg(long)]
    pub json: bool,

    /// Keep target/other sub-buckets as separate lines instead of summing their override totals
    #[arg(long)]
    pub keep_sub_buckets: bool,

    /// Report entries whose unit is not in the unit catalog before aggregating
    #[arg(long)]
    pub validate: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["shopping_units", "-e", "list.csv", "--json", "--keep-sub-buckets"]);
        assert_eq!(cli.entries_file, "list.csv");
        assert!(cli.json);
        assert!(cli.keep_sub_buckets);
        assert!(!cli.validate);
    }

    #[test]
    fn test_entries_file_is_required() {
        assert!(Cli::try_parse_from(["shopping_units", "--json"]).is_err());
    }
}
