use std::io::{BufRead, Write};

use am_ascii::ArtAlgorithm;
use am_core::charset;
use am_core::config::{OutputKind, RenderConfig, RoundingMode};
use am_render::Renderer;
use anyhow::Result;

const PROMPT: &str = ">>> ";
const INCREASE_FACTOR: f64 = 2.0;
const DECREASE_FACTOR: f64 = 0.5;

/// Mutation de palette demandée par `add` / `remove`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PaletteEdit {
    Add,
    Remove,
}

impl PaletteEdit {
    fn verb(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    /// Apply to one character; `true` if the palette changed.
    fn apply(self, art: &mut ArtAlgorithm, c: char) -> bool {
        match self {
            // parse_char_spec ne renvoie que des caractères imprimables
            Self::Add => art.add_char(c).unwrap_or(false),
            Self::Remove => art.remove_char(c),
        }
    }
}

/// Résultat d'une commande.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Shell ligne par ligne au-dessus de l'API palette / résolution.
pub struct Shell {
    art: ArtAlgorithm,
    renderer: Renderer,
    config: RenderConfig,
}

impl Shell {
    #[must_use]
    pub fn new(art: ArtAlgorithm, renderer: Renderer, config: RenderConfig) -> Self {
        Self {
            art,
            renderer,
            config,
        }
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// Command failures are reported on `out` and never end the loop.
    ///
    /// # Errors
    /// Only I/O errors on `input` or `out`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        writeln!(out, "Enter a command:")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
        for line in input.lines() {
            if self.execute(&line?, out)? == Flow::Exit {
                return Ok(());
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        Ok(())
    }

    /// Execute one command line.
    ///
    /// # Errors
    /// Only I/O errors on `out`.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            "exit" => return Ok(Flow::Exit),
            "chars" => self.print_chars(out)?,
            "add" => self.handle_chars(arg, PaletteEdit::Add, out)?,
            "remove" => self.handle_chars(arg, PaletteEdit::Remove, out)?,
            "res" => self.handle_resolution(arg, out)?,
            "round" => self.handle_rounding(arg, out)?,
            "output" => self.handle_output(arg, out)?,
            "asciiArt" => self.handle_render(out)?,
            "" => {}
            other => {
                log::warn!("Commande inconnue : {other:?}");
                writeln!(out, "Did not recognize command.")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Render once with the active renderer.
    ///
    /// # Errors
    /// Empty palette, or a renderer write failure.
    pub fn render_once<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let grid = self.art.render()?;
        self.renderer.out(&grid, out)
    }

    fn print_chars<W: Write>(&self, out: &mut W) -> Result<()> {
        let chars: Vec<String> = self
            .art
            .current_characters()
            .iter()
            .map(char::to_string)
            .collect();
        writeln!(out, "{}", chars.join(" "))?;
        Ok(())
    }

    fn handle_chars<W: Write>(&mut self, arg: &str, edit: PaletteEdit, out: &mut W) -> Result<()> {
        let verb = edit.verb();
        let chars = match charset::parse_char_spec(arg) {
            Ok(chars) => chars,
            Err(e) => {
                log::warn!("{verb} {arg:?} : {e}");
                writeln!(out, "Did not {verb} due to incorrect format.")?;
                return Ok(());
            }
        };
        let changed = chars
            .into_iter()
            .filter(|&c| edit.apply(&mut self.art, c))
            .count();
        log::debug!("{verb} : {changed} caractère(s) modifié(s)");
        Ok(())
    }

    fn handle_resolution<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        let factor = match arg {
            "" => {
                writeln!(out, "Resolution set to {}", self.art.current_resolution())?;
                return Ok(());
            }
            "up" => INCREASE_FACTOR,
            "down" => DECREASE_FACTOR,
            _ => {
                writeln!(out, "Did not change resolution due to incorrect format.")?;
                return Ok(());
            }
        };
        if self.art.change_resolution(factor) {
            writeln!(out, "Resolution set to {}", self.art.current_resolution())?;
        } else {
            writeln!(out, "Did not change resolution due to incorrect format.")?;
        }
        Ok(())
    }

    fn handle_rounding<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        let mode = match arg {
            "up" => Ok(RoundingMode::Ceiling),
            "down" => Ok(RoundingMode::Floor),
            "abs" => Ok(RoundingMode::Nearest),
            name => name.parse::<RoundingMode>(),
        };
        match mode {
            Ok(mode) => self.art.set_rounding_mode(mode),
            Err(e) => {
                log::warn!("{e}");
                writeln!(out, "Did not change rounding method due to incorrect format.")?;
            }
        }
        Ok(())
    }

    fn handle_output<W: Write>(&mut self, arg: &str, out: &mut W) -> Result<()> {
        match arg.parse::<OutputKind>() {
            Ok(kind) => {
                self.renderer = Renderer::from_config(kind, &self.config);
                log::debug!("Sortie : {}", self.renderer.name());
            }
            Err(e) => {
                log::warn!("{e}");
                writeln!(out, "Did not change output method due to incorrect format.")?;
            }
        }
        Ok(())
    }

    fn handle_render<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.art.current_characters().len() < 2 {
            writeln!(out, "Did not execute. Charset is too small.")?;
            return Ok(());
        }
        if let Err(e) = self.render_once(out) {
            log::warn!("Rendu échoué : {e:#}");
            writeln!(out, "Did not execute. {e:#}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use am_core::frame::FrameBuffer;

    fn shell(chars: &str) -> Shell {
        let image = FrameBuffer::filled(8, 4, (255, 255, 255));
        let art = ArtAlgorithm::new(image, chars.chars(), 2, RoundingMode::Nearest);
        Shell::new(art, Renderer::Console, RenderConfig::default())
    }

    fn run(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_remove_and_list() {
        let mut sh = shell("01");
        let out = run(&mut sh, "add a-c\nremove 0\nadd space\nchars\nexit\n");
        assert!(out.contains("  1 a b c\n"), "{out}");
    }

    #[test]
    fn palette_edit_dispatch() {
        let mut sh = shell("01");
        assert!(PaletteEdit::Add.apply(&mut sh.art, 'x'));
        assert!(!PaletteEdit::Add.apply(&mut sh.art, 'x'));
        assert!(PaletteEdit::Remove.apply(&mut sh.art, '0'));
        assert!(!PaletteEdit::Remove.apply(&mut sh.art, '0'));
        assert_eq!(sh.art.current_characters(), vec!['1', 'x']);
        assert_eq!(PaletteEdit::Remove.verb(), "remove");
    }

    #[test]
    fn malformed_char_spec_is_reported() {
        let mut sh = shell("01");
        let out = run(&mut sh, "add abc\nremove\n");
        assert!(out.contains("Did not add due to incorrect format."));
        assert!(out.contains("Did not remove due to incorrect format."));
        assert_eq!(sh.art.current_characters(), vec!['0', '1']);
    }

    #[test]
    fn resolution_commands() {
        // 8×4 : bornes [2, 4]
        let mut sh = shell("01");
        let out = run(&mut sh, "res up\nres up\nres\nres down\nres down\nres sideways\n");
        let lines: Vec<&str> = out
            .lines()
            .map(|l| l.trim_start_matches(PROMPT))
            .filter(|l| !l.is_empty() && *l != "Enter a command:")
            .collect();
        assert_eq!(
            lines,
            vec![
                "Resolution set to 4",
                "Did not change resolution due to incorrect format.",
                "Resolution set to 4",
                "Resolution set to 2",
                "Did not change resolution due to incorrect format.",
                "Did not change resolution due to incorrect format.",
            ]
        );
        assert_eq!(sh.art.current_resolution(), 2);
    }

    #[test]
    fn rounding_aliases() {
        let mut sh = shell("01");
        run(&mut sh, "round up\n");
        assert_eq!(sh.art.rounding(), RoundingMode::Ceiling);
        run(&mut sh, "round down\n");
        assert_eq!(sh.art.rounding(), RoundingMode::Floor);
        run(&mut sh, "round abs\n");
        assert_eq!(sh.art.rounding(), RoundingMode::Nearest);
        let out = run(&mut sh, "round sideways\n");
        assert!(out.contains("Did not change rounding method due to incorrect format."));
        assert_eq!(sh.art.rounding(), RoundingMode::Nearest);
    }

    #[test]
    fn render_requires_two_characters() {
        let mut sh = shell("@");
        let out = run(&mut sh, "asciiArt\n");
        assert!(out.contains("Did not execute. Charset is too small."));
    }

    #[test]
    fn render_to_console() {
        let mut sh = shell(".@");
        let out = run(&mut sh, "asciiArt\nexit\n");
        assert!(out.contains("@@@@\n@@@@\n"), "{out}");
    }

    #[test]
    fn output_switch_and_unknown_command() {
        let mut sh = shell("01");
        let out = run(&mut sh, "output pdf\nfrobnicate\noutput html\n");
        assert!(out.contains("Did not change output method due to incorrect format."));
        assert!(out.contains("Did not recognize command."));
        assert_eq!(sh.renderer.name(), "html");
    }

    #[test]
    fn exit_stops_reading() {
        let mut sh = shell("01");
        run(&mut sh, "exit\nadd x\n");
        assert!(!sh.art.current_characters().contains(&'x'));
    }
}
