use clap::{Parser, Subcommand};

use git_semv::config::{self, Config};
use git_semv::domain::{BumpKind, VersionList};
use git_semv::error::{Result, SemvError};
use git_semv::git::GitMetadata;
use git_semv::remote::{GithubTagSource, TagSource};
use git_semv::ui;

#[derive(Parser)]
#[command(
    name = "git-semv",
    version,
    about = "Compute the next semantic version from repository tags"
)]
struct Args {
    #[arg(short, long, help = "Repository in owner/name form")]
    repo: Option<String>,

    #[arg(short = 'x', long, help = "Prefix for version and tag (default: v)")]
    prefix: Option<String>,

    #[arg(short, long, help = "Attach a pre-release suffix (ex: 0.0.1-rc.0)")]
    pre: bool,

    #[arg(long, help = "Pre-release identifier to use")]
    pre_name: Option<String>,

    #[arg(
        short,
        long,
        help = "Attach build metadata (ex: 0.0.1+3222d31.foo)"
    )]
    build: bool,

    #[arg(long, help = "Build label to use instead of the local username")]
    build_name: Option<String>,

    #[arg(short, long, help = "Include pre-release versions in list output")]
    all: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Sorted versions
    List,
    /// Latest version
    #[command(alias = "now")]
    Latest,
    /// Next major version: vX.0.0
    Major,
    /// Next minor version: v0.X.0
    Minor,
    /// Next patch version: v0.0.X
    Patch,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let config = match config::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            ui::display_error(&e.to_string());
            return 1;
        }
    };

    let source = match GithubTagSource::new() {
        Ok(source) => source,
        Err(e) => {
            ui::display_error(&e.to_string());
            return 1;
        }
    };

    match execute(args, &config, &source) {
        Ok(output) => {
            ui::display_output(&output);
            0
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            1
        }
    }
}

fn execute(args: &Args, config: &Config, source: &dyn TagSource) -> Result<String> {
    let repository = args
        .repo
        .clone()
        .or_else(|| config.repository.clone())
        .ok_or_else(|| {
            SemvError::remote("no repository specified; use --repo owner/name or set it in gitsemv.toml")
        })?;
    let prefix = args.prefix.as_deref().unwrap_or(&config.prefix);

    let tags = source.list_tags(&repository)?;
    let list = VersionList::from_tags(&tags, prefix);

    match args.command.unwrap_or(Command::List) {
        Command::List => {
            let list = if args.all {
                list
            } else {
                list.without_pre_release()
            };
            Ok(list.to_string())
        }
        Command::Latest => Ok(list.latest()?.to_string()),
        Command::Major => bump(args, config, &list, BumpKind::Major),
        Command::Minor => bump(args, config, &list, BumpKind::Minor),
        Command::Patch => bump(args, config, &list, BumpKind::Patch),
    }
}

fn bump(args: &Args, config: &Config, list: &VersionList, kind: BumpKind) -> Result<String> {
    let mut next = list.latest()?.next(kind);

    if args.pre || args.pre_name.is_some() {
        let name = args
            .pre_name
            .as_deref()
            .unwrap_or(&config.pre_release.identifier);
        next = next.with_pre_release(name)?;
    }

    if args.build || args.build_name.is_some() {
        let metadata = GitMetadata::discover(".")?;
        next = next.with_build(args.build_name.as_deref().unwrap_or(""), &metadata)?;
    }

    Ok(next.to_string())
}
