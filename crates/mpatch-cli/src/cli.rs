use clap::Parser;
use mpatch_core::{CommentMode, DirectoryPolicy, PatchConfig};

/// Printed ahead of clap's own message on any usage error.
pub const USAGE: &str = "Syntax:\nmassive-patch <unpacked-root> <patch-root>";

#[derive(Parser, Debug)]
#[command(
    name = "massive-patch",
    about = "Generate JSON patches forcing `printable` to true across an unpacked object tree",
    version,
)]
pub struct Cli {
    /// Directory tree of unpacked `.object` files to scan
    #[arg(value_name = "unpacked-root")]
    pub unpacked_root: String,

    /// Directory under which mirrored `.object.patch` files are written
    #[arg(value_name = "patch-root")]
    pub patch_root: String,

    /// Parse files as-is instead of stripping `//` and `/* */` comments
    #[arg(long)]
    pub keep_comments: bool,

    /// Still attempt the write when an output directory cannot be created
    #[arg(long)]
    pub tolerate_dir_errors: bool,

    /// Follow symbolic links while walking the unpacked tree
    #[arg(long)]
    pub follow_links: bool,

    /// Treat candidates larger than this many bytes as failures
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Emit debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the run configuration selected by the flags.
    pub fn to_config(&self) -> PatchConfig {
        PatchConfig {
            comments: if self.keep_comments {
                CommentMode::Keep
            } else {
                CommentMode::Strip
            },
            directory_policy: if self.tolerate_dir_errors {
                DirectoryPolicy::Attempt
            } else {
                DirectoryPolicy::SkipFile
            },
            follow_links: self.follow_links,
            max_file_size: self.max_file_size,
            ..PatchConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parse_two_roots() {
        let cli = Cli::try_parse_from(["massive-patch", "/unpacked", "/patches"]).unwrap();
        assert_eq!(cli.unpacked_root, "/unpacked");
        assert_eq!(cli.patch_root, "/patches");
        assert!(!cli.verbose);
        assert_eq!(cli.to_config(), PatchConfig::default());
    }

    #[test]
    fn missing_patch_root_is_error() {
        let err = Cli::try_parse_from(["massive-patch", "/unpacked"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn no_args_is_error() {
        assert!(Cli::try_parse_from(["massive-patch"]).is_err());
    }

    #[test]
    fn extra_positional_is_error() {
        assert!(Cli::try_parse_from(["massive-patch", "a", "b", "c"]).is_err());
    }

    #[test]
    fn non_ascii_roots() {
        let cli = Cli::try_parse_from(["massive-patch", "/données/objets", "/補丁"]).unwrap();
        assert_eq!(cli.unpacked_root, "/données/objets");
        assert_eq!(cli.patch_root, "/補丁");
    }

    #[test]
    fn flags_map_to_config() {
        let cli = Cli::try_parse_from([
            "massive-patch",
            "--keep-comments",
            "--tolerate-dir-errors",
            "--follow-links",
            "--max-file-size",
            "4096",
            "in",
            "out",
        ])
        .unwrap();

        let config = cli.to_config();
        assert_eq!(config.comments, CommentMode::Keep);
        assert_eq!(config.directory_policy, DirectoryPolicy::Attempt);
        assert!(config.follow_links);
        assert_eq!(config.max_file_size, Some(4096));
        assert_eq!(config.field, "printable");
    }

    #[test]
    fn parse_no_color() {
        let cli = Cli::try_parse_from(["massive-patch", "--no-color", "in", "out"]).unwrap();
        assert!(cli.no_color);
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["massive-patch", "-v", "in", "out"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn help_is_not_a_usage_error() {
        let err = Cli::try_parse_from(["massive-patch", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }
}
