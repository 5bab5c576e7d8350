//! Interactive session loop: credential gate, word prompt, generation, and
//! the save/data-URI download affordances.

use crate::ai::{ImageGenerationService, OpenAiImageClient};
use crate::image::encode;
use crate::models::{InspirationWord, IMAGE_MODEL};
use crate::prompts;
use crate::session::{Credential, GeneratedMandala, Session};
use crate::Result;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info};

/// Drives one user's session over generic input/output handles.
///
/// Exactly one generation is in flight at a time: the loop awaits each
/// request to completion before reading the next action.
pub struct App {
    image_gen: Box<dyn ImageGenerationService>,
    output_dir: PathBuf,
}

impl App {
    /// Build an app against the real provider endpoint.
    pub fn new(output_dir: PathBuf) -> Self {
        Self::with_services(
            Box::new(OpenAiImageClient::new(IMAGE_MODEL.to_string())),
            output_dir,
        )
    }

    /// Build an app from a concrete service dependency.
    ///
    /// This is primarily useful for tests and harnesses that need to inject
    /// mocks.
    pub fn with_services(image_gen: Box<dyn ImageGenerationService>, output_dir: PathBuf) -> Self {
        Self {
            image_gen,
            output_dir,
        }
    }

    /// Run the interactive loop until `:quit` or end of input.
    ///
    /// Until the session holds a credential, only the key prompt is
    /// reachable; no generation action exists without one.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        session: &mut Session,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        writeln!(out, "Black & White Mandala Generator")?;
        writeln!(out, "Transform a word into a mandala design.")?;
        writeln!(out)?;

        loop {
            if session.credential().is_none() {
                if !self.prompt_for_credential(session, input, out)? {
                    return Ok(());
                }
                continue;
            }

            write!(out, "Enter a word for inspiration: ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };

            match line.trim() {
                ":quit" | ":q" => return Ok(()),
                ":save" => self.save_last(session, out)?,
                ":uri" => self.print_data_uri(session, out)?,
                "" => writeln!(out, "Please enter an inspiration word.")?,
                word => self.generate(session, word, out).await?,
            }
        }
    }

    /// Ask for the credential; returns `false` on end of input.
    fn prompt_for_credential<R: BufRead, W: Write>(
        &self,
        session: &mut Session,
        input: &mut R,
        out: &mut W,
    ) -> Result<bool> {
        write!(out, "Enter your OpenAI API key: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        match Credential::new(&line) {
            Some(credential) => {
                session.set_credential(credential);
                writeln!(
                    out,
                    "Key accepted. Commands: :save writes the last mandala to disk, :uri prints it as a data URI, :quit exits."
                )?;
            }
            None => {
                writeln!(
                    out,
                    "Please enter your OpenAI API key to start generating mandalas."
                )?;
            }
        }
        Ok(true)
    }

    async fn generate<W: Write>(&self, session: &mut Session, raw: &str, out: &mut W) -> Result<()> {
        let Some(word) = InspirationWord::new(raw) else {
            writeln!(out, "Please enter an inspiration word.")?;
            return Ok(());
        };
        let Some(credential) = session.credential().cloned() else {
            writeln!(
                out,
                "Please enter your OpenAI API key to start generating mandalas."
            )?;
            return Ok(());
        };

        let prompt = prompts::build(word.as_str());
        writeln!(out, "Creating a mandala inspired by '{}'...", word)?;
        out.flush()?;
        info!("Generating mandala for '{}'", word);

        let started = Instant::now();
        match self.image_gen.generate_image(&prompt, &credential).await {
            Ok(image) => {
                let elapsed = started.elapsed().as_secs_f64();
                writeln!(out, "Mandala generated in {:.2} seconds!", elapsed)?;
                writeln!(
                    out,
                    "Received a {}x{} image. Type :save to write '{}' or :uri for a data URI.",
                    image.width(),
                    image.height(),
                    word.download_filename()
                )?;
                session.set_last_image(GeneratedMandala::new(word, image));
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                // Single collapsed message at the boundary; the previously
                // generated image stays in the session.
                writeln!(out, "Error generating image: {}", e)?;
            }
        }
        Ok(())
    }

    fn save_last<W: Write>(&self, session: &Session, out: &mut W) -> Result<()> {
        let Some(mandala) = session.last_image() else {
            writeln!(out, "No mandala to save yet.")?;
            return Ok(());
        };

        let path = self.output_dir.join(mandala.word().download_filename());
        match encode::write_png(mandala.image(), &path) {
            Ok(()) => {
                info!("Saved mandala to {}", path.display());
                writeln!(out, "Saved {}", path.display())?;
            }
            Err(e) => {
                error!("Failed to save mandala: {}", e);
                writeln!(out, "Could not save the mandala: {}", e)?;
            }
        }
        Ok(())
    }

    fn print_data_uri<W: Write>(&self, session: &Session, out: &mut W) -> Result<()> {
        let Some(mandala) = session.last_image() else {
            writeln!(out, "No mandala to encode yet.")?;
            return Ok(());
        };

        match encode::to_data_uri(mandala.image()) {
            Ok(uri) => writeln!(out, "{}", uri)?,
            Err(e) => writeln!(out, "Could not encode the mandala: {}", e)?,
        }
        Ok(())
    }
}

/// Read one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
