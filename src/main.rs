use anyhow::Result;
use derive_more::Display;
use inquire::{InquireError, Select, Text};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use zahlung::consts::{LOG_FILE, LOG_LEVEL};
use zahlung::utils::input_validation::{Iban, PositiveAmount};
use zahlung::{Country, Currency, Field, FormSession, SessionState};

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Shows the menu once. Returns None when the menu is done,
    /// Some(()) when it should be shown again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Shows the menu until it is done. Errors are printed and the menu
    /// goes on, except when the user interrupts the prompt.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                if matches!(
                    error.downcast_ref::<InquireError>(),
                    Some(InquireError::OperationInterrupted)
                ) {
                    break;
                }
                eprintln!("Fehler: {error}");
            }
        }
    }
}

pub struct App {
    session: FormSession,
}

impl App {
    pub fn new(session: FormSession) -> Self {
        App { session }
    }

    pub fn start(&mut self) -> Result<()> {
        println!("Bankzahlung erfassen");
        self.enter_loop();
        Ok(())
    }

    fn edit_field(&mut self) -> Result<()> {
        let fields: Vec<Field> = Field::iter().filter(|field| field.is_text()).collect();
        let Some(field) = Select::new("Welches Feld?", fields).prompt_skippable()? else {
            return Ok(());
        };

        let label = field.to_string();
        let current = self.session.draft().value(field);
        let mut prompt = Text::new(&label).with_initial_value(&current);
        if let Some(placeholder) = field.placeholder(self.session.draft().country) {
            prompt = prompt.with_placeholder(placeholder);
        }
        if let Some(error) = self.session.error_for(field) {
            prompt = prompt.with_help_message(error.message());
        }

        let value = prompt.prompt()?;
        self.session.set_field(field, &value)?;

        if field == Field::Iban {
            println!("IBAN: {}", self.session.draft().iban);
        }
        Ok(())
    }

    fn show_draft(&self) {
        let draft = self.session.draft();
        println!();
        for field in Field::iter() {
            println!("{:<24} {}", field.to_string(), draft.value(field));
            if let Some(error) = self.session.error_for(field) {
                println!("{:<24} ! {error}", "");
            }
        }
        println!();
    }

    fn submit(&mut self) -> Result<()> {
        match self.session.submit()? {
            SessionState::Submitted => {}
            SessionState::Editable => {
                println!("Bitte korrigieren Sie folgende Angaben:");
                for (field, error) in self.session.errors().iter() {
                    println!("  {field}: {error}");
                }
            }
        }
        Ok(())
    }

    fn confirmation(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Neue Zahlung")]
            NewPayment,
            #[display("Beenden")]
            Exit,
        }

        if let Some(payment) = self.session.submitted() {
            println!("\nZahlung erfasst");
            println!("Die Bankzahlung wurde erfolgreich erfasst und wird verarbeitet.");

            if let (Ok(amount), Ok(iban)) = (
                PositiveAmount::try_from(payment.amount.as_str()),
                Iban::try_from(payment.iban.as_str()),
            ) {
                println!(
                    "{} {amount} an {}, {iban}\n",
                    payment.currency, payment.recipient_name
                );
            }
        }

        let choice = Select::new("Wie weiter?", Choice::iter().collect()).prompt()?;
        match choice {
            Choice::NewPayment => {
                self.session.reset();
                Ok(MENU_LOOP)
            }
            Choice::Exit => Ok(MENU_EXIT),
        }
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Feld bearbeiten")]
            EditField,
            #[display("Land wählen")]
            SelectCountry,
            #[display("Währung wählen")]
            SelectCurrency,
            #[display("Übersicht anzeigen")]
            Show,
            #[display("Zahlung erfassen")]
            Submit,
            #[display("Zurücksetzen")]
            Reset,
            #[display("Beenden")]
            Exit,
        }

        if self.session.is_submitted() {
            return self.confirmation();
        }

        let Some(choice) =
            Select::new("Was möchten Sie tun?", Choice::iter().collect()).prompt_skippable()?
        else {
            return Ok(MENU_EXIT);
        };

        match choice {
            Choice::EditField => self.edit_field()?,
            Choice::SelectCountry => {
                let country = Select::new("Land", Country::iter().collect()).prompt()?;
                self.session.set_country(country)?;
            }
            Choice::SelectCurrency => {
                let currency = Select::new("Währung", Currency::iter().collect()).prompt()?;
                self.session.set_currency(currency)?;
            }
            Choice::Show => self.show_draft(),
            Choice::Submit => self.submit()?,
            Choice::Reset => self.session.reset(),
            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> anyhow::Result<()> {
    simple_logging::log_to_file(LOG_FILE, LOG_LEVEL)?;

    App::new(FormSession::new()).start()
}
