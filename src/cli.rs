use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the persisted recipe list and API key
    #[arg(short, long, default_value = ".recipe_picker")]
    pub data_dir: String,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
