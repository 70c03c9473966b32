use std::io;

use am_ascii::ArtAlgorithm;
use am_render::Renderer;
use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod shell;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config (+ overrides CLI)
    let config = cli.resolve_config()?;

    // 4. Décoder l'image : un échec est fatal, rien n'est construit
    let image = am_source::image::load_image(&cli.image)?;

    // 5. Construire l'algorithme et la sortie
    let art = ArtAlgorithm::new(
        image,
        config.initial_chars(),
        config.resolution,
        config.rounding,
    );
    if let Some(ref path) = cli.dump_padded {
        am_source::image::save_png(art.padded(), path)?;
        log::info!("Image paddée écrite : {}", path.display());
    }
    let renderer = Renderer::from_config(config.output, &config);
    log::info!(
        "Palette {:?}, résolution {}, arrondi {}, sortie {}",
        config.charset,
        art.current_resolution(),
        art.rounding(),
        renderer.name()
    );
    let mut shell = shell::Shell::new(art, renderer, config);

    // 6. Rendu unique ou shell interactif
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.once {
        return shell.render_once(&mut out);
    }
    shell.run(io::stdin().lock(), &mut out)
}
