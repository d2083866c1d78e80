use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "svl2jams")]
#[command(version = "1.0")]
#[command(about = "Converts a Sonic Visualiser annotation into a JAMS", long_about = None)]
pub struct Cli {
    /// Input SVL file
    pub in_path: PathBuf,

    /// Identifier of the annotator (e.g. Collin, Ferran)
    pub annotator_id: String,

    /// Existing JAMS file to add the annotation to
    #[arg(short = 'o', long = "output", default_value = "output.jams")]
    pub out_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_defaults_to_output_jams() {
        let cli = Cli::try_parse_from(["svl2jams", "song.svl", "Collin"]).unwrap();
        assert_eq!(cli.in_path, PathBuf::from("song.svl"));
        assert_eq!(cli.annotator_id, "Collin");
        assert_eq!(cli.out_file, PathBuf::from("output.jams"));
    }

    #[test]
    fn output_can_be_overridden() {
        let cli = Cli::try_parse_from(["svl2jams", "-o", "song.jams", "song.svl", "Ferran"]).unwrap();
        assert_eq!(cli.out_file, PathBuf::from("song.jams"));
    }

    #[test]
    fn annotator_is_required() {
        assert!(Cli::try_parse_from(["svl2jams", "song.svl"]).is_err());
    }
}
