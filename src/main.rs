use anyhow::Result;
use brandkit::cli::{Cli, Commands};
use brandkit::commands;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    brandkit::logging::init(cli.verbose);

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Clean {
            path,
            alpha_threshold,
            no_black_bleed,
            black_rgb_max,
            remove_black_bg,
            black_bg_max,
        } => commands::clean::run(
            &cli,
            path,
            commands::clean::Overrides {
                alpha_threshold: *alpha_threshold,
                no_black_bleed: *no_black_bleed,
                black_rgb_max: *black_rgb_max,
                remove_black_bg: *remove_black_bg,
                black_bg_max: *black_bg_max,
            },
        ),
        Commands::CropIcon {
            path,
            pad,
            threshold,
        } => commands::crop::run(&cli, path, *pad, *threshold),
        Commands::Logo {
            src,
            out_mark,
            out_lockup,
            pad,
            white_threshold,
            black_threshold,
            mark_size,
        } => commands::logo::run(
            &cli,
            src,
            out_mark,
            out_lockup,
            commands::logo::Overrides {
                pad: *pad,
                white_threshold: *white_threshold,
                black_threshold: *black_threshold,
                mark_size: *mark_size,
            },
        ),
        Commands::LauncherIcons { root } => commands::launcher::run(&cli, root),
        Commands::Seed {
            url,
            api_key,
            project_name,
            project_identifier,
            dry_run,
        } => {
            commands::seed::run(
                &cli,
                commands::seed::SeedArgs {
                    url: url.clone(),
                    api_key: api_key.clone(),
                    project_name: project_name.clone(),
                    project_identifier: project_identifier.clone(),
                    dry_run: *dry_run,
                },
            )
            .await
        }
    }
}
