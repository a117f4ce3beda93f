use std::path::PathBuf;

use clap::Parser;
use podex::build::{build_site, BuildConfig};
use podex::site::SiteData;
use podex::{locales, sitemap, FsIndexSource, SearchSession};

mod cli;
use cli::{Cli, Commands};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("{} {}", cli::red("error:"), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> podex::Result<()> {
    match cli.command {
        Commands::Build {
            input,
            output,
            public,
            locales: requested,
            max_episodes,
        } => {
            let config = BuildConfig {
                input_dir: PathBuf::from(input),
                output_dir: PathBuf::from(output),
                public_dir: public.map(PathBuf::from),
                locales: requested
                    .unwrap_or_else(|| locales::codes().map(str::to_string).collect()),
                max_episodes,
            };
            let report = build_site(&config)?;
            for summary in &report.locales {
                println!(
                    "  {:8} {:4} episodes  {:5} documents{}",
                    summary.locale,
                    summary.episodes,
                    summary.documents,
                    if summary.fallback {
                        "  (fallback index)"
                    } else {
                        ""
                    }
                );
            }
            println!(
                "{} {} locales, {} search documents",
                cli::green("built"),
                report.locales.len(),
                report.total_documents()
            );
            Ok(())
        }

        Commands::Search {
            data,
            locale,
            query,
            limit,
        } => {
            if !locales::is_supported(&locale) {
                return Err(podex::Error::UnsupportedLocale(locale));
            }

            let session = SearchSession::new();
            let source = FsIndexSource::new(&data);
            let runtime = tokio::runtime::Builder::new_current_thread().build()?;
            runtime.block_on(session.load(&source, &locale));

            let results = session.search(&query);
            if results.is_empty() {
                println!("{}", cli::dim("no results"));
                return Ok(());
            }
            for result in results.iter().take(limit) {
                println!(
                    "{} {}  {} [{}]",
                    cli::dim(&format!("{:>2}", result.score)),
                    cli::bold(&result.document.title),
                    result.document.speaker,
                    result.document.timestamp
                );
                println!("   {}", result.document.content);
            }
            Ok(())
        }

        Commands::Sitemap {
            data,
            site_url,
            output,
        } => {
            let xml = sitemap::generate(&site_url, &SiteData::new(&data))?;
            match output {
                Some(path) => std::fs::write(path, xml)?,
                None => println!("{xml}"),
            }
            Ok(())
        }
    }
}
