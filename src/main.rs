use anyhow::Result;
use clap::{App, AppSettings, Arg, SubCommand};
use deitheon::build;
use deitheon::config::Config;
use deitheon::content::CATALOG;
use deitheon::emit::Emitter;
use deitheon::homepage;
use deitheon::index;
use env_logger::{Builder, Env};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = App::new("deitheon")
        .about("Generates the Deitheon site's article content")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .global(true)
                .help("Seed for the random generator (overrides the project file)"),
        )
        .subcommand(SubCommand::with_name("build").about(
            "Emits all articles, then rebuilds the sitemap, category indexes, and homepage",
        ))
        .subcommand(SubCommand::with_name("articles").about("Emits article pages only"))
        .subcommand(SubCommand::with_name("indexes").about("Rebuilds the category index pages"))
        .subcommand(
            SubCommand::with_name("homepage").about("Refreshes the homepage featured sections"),
        )
        .subcommand(
            SubCommand::with_name("sitemap")
                .about("Regenerates sitemap.xml from the emitted site"),
        )
        .get_matches();

    let (command, sub_matches) = matches.subcommand();
    // A global flag may be given before or after the subcommand.
    let seed = match sub_matches
        .and_then(|m| m.value_of("seed"))
        .or_else(|| matches.value_of("seed"))
    {
        Some(seed) => Some(seed.parse()?),
        None => None,
    };
    let config = Config::from_directory(&std::env::current_dir()?, seed)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match command {
        "build" => build::build_site(&config, &mut rng)?,
        "articles" => {
            let mut emitter = Emitter {
                output_directory: &config.output_directory,
                base_date: config.base_date,
                rng: &mut rng,
            };
            emitter.emit_all(CATALOG)?;
        }
        "indexes" => index::write_category_indexes(&config.output_directory, CATALOG)?,
        "homepage" => homepage::update_homepage(
            &config.output_directory,
            CATALOG,
            config.featured_per_category,
            &mut rng,
        )?,
        "sitemap" => {
            let records = build::collect_records(&config)?;
            build::write_sitemap_file(&config, &records)?;
        }
        _ => unreachable!(),
    }

    Ok(())
}
