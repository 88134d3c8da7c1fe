//! Line-oriented interactive session around the filter engine.
//!
//! The shell owns the current image and walks the [`ShellState`] machine:
//! ask for an image, ask for a filter, offer to save, then either keep
//! filtering the same image or ask for a new one. Input comes from any
//! `BufRead` and prompts go to any `Write`, so a session can be scripted.
//! End of input at any prompt ends the session.
pub mod prompt;
pub mod state;

pub use prompt::{MenuChoice, SaveChoice};
pub use state::{ShellEvent, ShellState};

use crate::composite::merge_into;
use crate::config::ShellConfig;
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::image::{ImageStore, PixelBuffer};
use crate::tone::{Adjustment, Direction};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::thread;

const RULE: &str = "-------------------------------------------------";

/// What the shell is holding between steps.
#[derive(Debug)]
pub struct Session {
    pub state: ShellState,
    pub image: Option<PixelBuffer>,
    /// Whether the last filtered result was written out.
    pub saved: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            state: ShellState::AwaitImage,
            image: None,
            saved: false,
        }
    }
}

pub struct Shell<R, W, S> {
    input: R,
    output: W,
    store: S,
    config: ShellConfig,
    session: Session,
}

impl<R: BufRead, W: Write, S: ImageStore> Shell<R, W, S> {
    pub fn new(input: R, output: W, store: S, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            store,
            config,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "-----------------------------")?;
        writeln!(self.output, "| Welcome to Baby Photoshop |")?;
        writeln!(self.output, "-----------------------------")?;

        loop {
            let state = self.session.state;
            let event = match state {
                ShellState::AwaitImage => self.await_image()?,
                ShellState::ChooseFilter => self.choose_filter()?,
                ShellState::ConfirmSave => self.confirm_save()?,
                ShellState::Exit => break,
            };
            self.session.state = state.next(event).unwrap_or_else(|| {
                warn!("no transition from {state:?} on {event:?}, exiting");
                ShellState::Exit
            });
        }

        if self.session.image.is_some() && !self.session.saved {
            info!("exiting with unsaved changes to the current image");
        }
        writeln!(self.output, "------------")?;
        writeln!(self.output, "| GOOD BYE |")?;
        writeln!(self.output, "------------")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `prompt` and read the next non-blank line, trimmed.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
    }

    /// Ask until `parse` accepts the answer.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        invalid: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<Option<T>> {
        while let Some(answer) = self.ask(prompt)? {
            if let Some(value) = parse(&answer) {
                return Ok(Some(value));
            }
            writeln!(self.output, "{invalid}")?;
        }
        Ok(None)
    }

    fn report_failure(&mut self, err: &Error) -> Result<()> {
        warn!("{err}");
        writeln!(self.output, "{err}")?;
        self.output.flush()?;
        thread::sleep(self.config.error_pause());
        Ok(())
    }

    fn await_image(&mut self) -> Result<ShellEvent> {
        writeln!(self.output, "{RULE}")?;
        let answer = self.ask("Please enter an image name or type exit to close: ")?;
        writeln!(self.output, "{RULE}")?;
        let Some(name) = answer else {
            return Ok(ShellEvent::Quit);
        };
        if name == "exit" {
            return Ok(ShellEvent::Quit);
        }
        match self.store.load(&name) {
            Ok(image) => {
                info!("loaded {name} ({}x{})", image.width(), image.height());
                self.session.image = Some(image);
                self.session.saved = false;
                Ok(ShellEvent::ImageLoaded)
            }
            Err(err) => {
                self.report_failure(&err)?;
                Ok(ShellEvent::LoadFailed)
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "-----------------------------------")?;
        writeln!(self.output, "| what filter do you want to use? |")?;
        writeln!(self.output, "-----------------------------------")?;
        writeln!(self.output, "1. Grayscale              2. Edge detect")?;
        writeln!(self.output, "3. Merge Images           4. Brighten or Darken Image")?;
        writeln!(self.output, "5. Purple")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "0. Exit the program")?;
        Ok(())
    }

    fn choose_filter(&mut self) -> Result<ShellEvent> {
        self.print_menu()?;
        let choice = self.ask_until(
            "Enter choice: ",
            "Please enter a valid choice",
            prompt::parse_menu_choice,
        )?;
        let filter = match choice {
            None | Some(MenuChoice::Exit) => return Ok(ShellEvent::Quit),
            Some(MenuChoice::Grayscale) => Filter::Grayscale,
            Some(MenuChoice::EdgeDetect) => Filter::EdgeDetect,
            Some(MenuChoice::Purple) => Filter::Purple,
            Some(MenuChoice::Brightness) => match self.ask_adjustment()? {
                Some(adjustment) => Filter::Brightness(adjustment),
                None => return Ok(ShellEvent::Quit),
            },
            Some(MenuChoice::Merge) => return self.merge_second_image(),
        };

        let Some(image) = self.session.image.as_mut() else {
            return Ok(ShellEvent::FilterFailed);
        };
        match filter.apply(image, &mut self.store) {
            Ok(()) => {
                info!("applied {filter}");
                Ok(ShellEvent::FilterApplied)
            }
            Err(err) => {
                self.report_failure(&err)?;
                Ok(ShellEvent::FilterFailed)
            }
        }
    }

    fn ask_adjustment(&mut self) -> Result<Option<Adjustment>> {
        writeln!(self.output, "----------------------------------------------------")?;
        writeln!(self.output, "| Would you like to Brighten or Darken your image? |")?;
        writeln!(self.output, "----------------------------------------------------")?;
        writeln!(self.output, "|1. Brighten.                                      |")?;
        writeln!(self.output, "|2. Darken.                                        |")?;
        writeln!(self.output, "----------------------------------------------------")?;
        let Some(direction) = self.ask_until(
            "Enter your choice: ",
            "Please enter a valid choice",
            prompt::parse_direction,
        )?
        else {
            return Ok(None);
        };

        let verb = match direction {
            Direction::Brighten => "brighten",
            Direction::Darken => "darken",
        };
        let question = format!(
            "How much do you want to {verb} your image by percent?\n\
             Enter a percent number between 0 and 100: "
        );
        while let Some(answer) = self.ask(&question)? {
            match prompt::parse_percent(&answer) {
                None => writeln!(self.output, "Invalid input. Please enter a valid number.")?,
                Some(percent) => match Adjustment::new(direction, percent) {
                    Ok(adjustment) => return Ok(Some(adjustment)),
                    Err(_) => writeln!(
                        self.output,
                        "Please enter a valid number between 0 and 100."
                    )?,
                },
            }
        }
        Ok(None)
    }

    /// Merge needs its second image loaded before the mode is asked, and a
    /// bad name is asked again rather than abandoning the filter.
    fn merge_second_image(&mut self) -> Result<ShellEvent> {
        let second = loop {
            let Some(name) = self.ask("Please enter the second image name: ")? else {
                return Ok(ShellEvent::Quit);
            };
            match self.store.load(&name) {
                Ok(image) => break image,
                Err(err) => self.report_failure(&err)?,
            }
        };

        writeln!(self.output, "-------------------------------------------------------")?;
        writeln!(self.output, "|       How would you like to merge your images?       |")?;
        writeln!(self.output, "-------------------------------------------------------")?;
        writeln!(self.output, "| 1. Resize dimensions of images to largest and merge. |")?;
        writeln!(self.output, "| 2. Crop dimensions of images to smallest and merge.  |")?;
        writeln!(self.output, "-------------------------------------------------------")?;
        let Some(mode) = self.ask_until(
            "Enter your choice: ",
            "Please enter a valid choice.",
            prompt::parse_merge_mode,
        )?
        else {
            return Ok(ShellEvent::Quit);
        };

        let Some(image) = self.session.image.as_mut() else {
            return Ok(ShellEvent::FilterFailed);
        };
        match merge_into(image, second, mode) {
            Ok(()) => {
                info!("merged ({mode:?}) -> {}x{}", image.width(), image.height());
                Ok(ShellEvent::FilterApplied)
            }
            Err(err) => {
                self.report_failure(&err)?;
                Ok(ShellEvent::FilterFailed)
            }
        }
    }

    fn confirm_save(&mut self) -> Result<ShellEvent> {
        let choice = self.ask_until(
            "Do you want to save the current image or discard it? (save/discard): ",
            "Please enter a valid option",
            prompt::parse_save_choice,
        )?;
        match choice {
            None => return Ok(ShellEvent::Quit),
            Some(SaveChoice::Discard) => self.session.saved = false,
            Some(SaveChoice::Save) => {
                if !self.save_current()? {
                    return Ok(ShellEvent::Quit);
                }
            }
        }

        let load_new = self.ask_until(
            "Do you want to load a new image? (yes/no): ",
            "Please enter a valid option",
            prompt::parse_yes_no,
        )?;
        Ok(match load_new {
            Some(load_new) => ShellEvent::Finished { load_new },
            None => ShellEvent::Quit,
        })
    }

    /// Ask for a file name until the save succeeds. `false` when input ended.
    fn save_current(&mut self) -> Result<bool> {
        loop {
            let Some(name) = self.ask(
                "Please enter the new image name to save it Or type the same name to overwrite it: ",
            )?
            else {
                return Ok(false);
            };
            let Some(image) = self.session.image.as_ref() else {
                return Ok(false);
            };
            match self.store.save(image, &name) {
                Ok(()) => {
                    info!("saved {name}");
                    self.session.saved = true;
                    return Ok(true);
                }
                Err(err) => self.report_failure(&err)?,
            }
        }
    }
}
