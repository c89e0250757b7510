use crate::app::render::Frame;
use crate::config::Settings;
use crate::core::{age, jalali, parse};
use crate::domain::model::AgeReport;
use crate::domain::ports::Console;
use crate::i18n::{self, tr, Lang, Msg};
use crate::utils::error::Result;
use chrono::NaiveDate;

fn is_back(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "b" | "back")
}

fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes" | "بله" | "آره")
}

/// The interactive toolkit: main menu, age cards, calendar conversion and the
/// language toggle. All terminal traffic goes through the [`Console`] port.
pub struct MenuApp<C: Console> {
    console: C,
    lang: Lang,
    frame: Frame,
    as_of: NaiveDate,
}

impl<C: Console> MenuApp<C> {
    pub fn new(console: C, settings: Settings) -> Self {
        Self {
            console,
            lang: settings.lang,
            frame: Frame::new(settings.unicode_boxes),
            as_of: settings.as_of,
        }
    }

    /// Hands the console back, e.g. so tests can inspect a transcript.
    pub fn into_console(self) -> C {
        self.console
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_main_menu();
            let Some(choice) = self.console.read_line(tr(self.lang, Msg::SelectPrompt))? else {
                return Ok(());
            };
            match parse::normalize_digits(&choice).trim() {
                "1" => self.age_gregorian_flow()?,
                "2" => self.age_jalali_flow()?,
                "3" => self.convert_jalali_flow()?,
                "4" => self.convert_gregorian_flow()?,
                "5" => self.language_menu()?,
                "0" => {
                    self.console.print_line(tr(self.lang, Msg::Goodbye));
                    return Ok(());
                }
                _ => self.console.print_line(tr(self.lang, Msg::InvalidChoice)),
            }
        }
    }

    fn show_main_menu(&mut self) {
        let lang = self.lang;
        self.console.print_line("");
        self.console.print_line(&self.frame.title(lang, tr(lang, Msg::MainMenu)));
        let items = [
            ("1)", Msg::AgeGregorian),
            ("2)", Msg::AgeJalali),
            ("3)", Msg::ConvertJ2G),
            ("4)", Msg::ConvertG2J),
            ("5)", Msg::Language),
            ("0)", Msg::Exit),
        ];
        for (number, msg) in items {
            self.console
                .print_line(&self.frame.menu_item(lang, number, tr(lang, msg)));
        }
        self.console.print_line(&self.frame.bottom());
    }

    /// Option 1: birthdate in the Gregorian calendar.
    fn age_gregorian_flow(&mut self) -> Result<()> {
        loop {
            let Some(raw) = self.console.read_line(tr(self.lang, Msg::EnterBirthGregorian))?
            else {
                return Ok(());
            };
            if is_back(&raw) {
                return Ok(());
            }
            let outcome = parse::parse_gregorian(&raw)
                .and_then(|born| age::age_report(born, self.as_of))
                .and_then(|report| self.show_age_card(&report));
            match outcome {
                Ok(()) => {
                    if !self.ask_try_another()? {
                        return Ok(());
                    }
                }
                Err(e) => self.report_error(&e.user_friendly_message()),
            }
        }
    }

    /// Option 2: birthdate in the Jalali calendar, converted first.
    fn age_jalali_flow(&mut self) -> Result<()> {
        loop {
            let Some(raw) = self.console.read_line(tr(self.lang, Msg::EnterBirthJalali))? else {
                return Ok(());
            };
            if is_back(&raw) {
                return Ok(());
            }
            let outcome = parse::parse_jalali(&raw)
                .and_then(jalali::to_gregorian)
                .and_then(|born| age::age_report(born, self.as_of))
                .and_then(|report| self.show_age_card(&report));
            match outcome {
                Ok(()) => {
                    if !self.ask_try_another()? {
                        return Ok(());
                    }
                }
                Err(e) => self.report_error(&e.user_friendly_message()),
            }
        }
    }

    /// Option 3: Jalali → Gregorian. Loops until the user backs out.
    fn convert_jalali_flow(&mut self) -> Result<()> {
        loop {
            let Some(raw) = self.console.read_line(tr(self.lang, Msg::JalaliDatePrompt))? else {
                return Ok(());
            };
            if is_back(&raw) {
                return Ok(());
            }
            match parse::parse_jalali(&raw).and_then(|j| Ok((j, jalali::to_gregorian(j)?))) {
                Ok((j, g)) => self.show_convert_card(Msg::ConvertJ2G, g, j),
                Err(e) => self.report_error(&e.user_friendly_message()),
            }
        }
    }

    /// Option 4: Gregorian → Jalali.
    fn convert_gregorian_flow(&mut self) -> Result<()> {
        loop {
            let Some(raw) = self.console.read_line(tr(self.lang, Msg::GregorianDatePrompt))?
            else {
                return Ok(());
            };
            if is_back(&raw) {
                return Ok(());
            }
            match parse::parse_gregorian(&raw).and_then(|g| Ok((g, jalali::from_gregorian(g)?))) {
                Ok((g, j)) => self.show_convert_card(Msg::ConvertG2J, g, j),
                Err(e) => self.report_error(&e.user_friendly_message()),
            }
        }
    }

    /// Option 5: English ↔ Persian toggle.
    fn language_menu(&mut self) -> Result<()> {
        let lang = self.lang;
        let (current, other) = match lang {
            Lang::Fa => (tr(lang, Msg::LangFa), tr(lang, Msg::LangEn)),
            Lang::En => (tr(lang, Msg::LangEn), tr(lang, Msg::LangFa)),
        };
        self.console.print_line("");
        self.console
            .print_line(&self.frame.title(lang, tr(lang, Msg::LanguageMenuTitle)));
        self.console
            .print_line(&self.frame.label_value(lang, tr(lang, Msg::CurrentLanguage), current));
        self.console
            .print_line(&self.frame.label_value(lang, tr(lang, Msg::SwitchTo), other));
        self.console.print_line(&self.frame.bottom());

        let prompt = format!(
            "[1] {} {} | [0] {}: ",
            tr(lang, Msg::SwitchTo),
            other,
            tr(lang, Msg::Exit)
        );
        let Some(choice) = self.console.read_line(&prompt)? else {
            return Ok(());
        };
        if parse::normalize_digits(&choice).trim() == "1" {
            self.lang = self.lang.toggled();
            tracing::debug!("Language switched to {:?}", self.lang);
        }
        Ok(())
    }

    fn ask_try_another(&mut self) -> Result<bool> {
        self.console.print_line("");
        let Some(answer) = self.console.read_line(tr(self.lang, Msg::TryAnother))? else {
            return Ok(false);
        };
        Ok(is_yes(&answer))
    }

    fn report_error(&mut self, message: &str) {
        self.console
            .print_line(&i18n::error_phrase(self.lang, message));
    }

    fn show_age_card(&mut self, report: &AgeReport) -> Result<()> {
        let lang = self.lang;
        let born_j = jalali::from_gregorian(report.born)?;
        let as_of_j = jalali::from_gregorian(report.as_of)?;
        let next_j = jalali::from_gregorian(report.next_birthday)?;

        self.console.print_line("");
        self.console
            .print_line(&self.frame.title(lang, tr(lang, Msg::AgeCardTitle)));
        let rows = [
            (Msg::BirthGregorian, report.born.to_string()),
            (Msg::AsOfGregorian, report.as_of.to_string()),
            (Msg::BirthJalali, born_j.to_string()),
            (Msg::AsOfJalali, as_of_j.to_string()),
            (
                Msg::Age,
                i18n::age_phrase(
                    lang,
                    report.breakdown.years,
                    report.breakdown.months,
                    report.breakdown.days,
                ),
            ),
            (Msg::NextBirthdayGregorian, report.next_birthday.to_string()),
            (Msg::NextBirthdayJalali, next_j.to_string()),
            (Msg::In, i18n::days_phrase(lang, report.days_until_birthday)),
        ];
        for (label, value) in rows {
            self.console
                .print_line(&self.frame.label_value(lang, tr(lang, label), &value));
        }
        self.console.print_line(&self.frame.bottom());
        Ok(())
    }

    fn show_convert_card(
        &mut self,
        title: Msg,
        gregorian: NaiveDate,
        jalali: crate::domain::model::JalaliDate,
    ) {
        let lang = self.lang;
        self.console.print_line("");
        self.console.print_line(&self.frame.title(lang, tr(lang, title)));
        self.console.print_line(&self.frame.label_value(
            lang,
            tr(lang, Msg::GregorianLabel),
            &gregorian.to_string(),
        ));
        self.console.print_line(&self.frame.label_value(
            lang,
            tr(lang, Msg::JalaliLabel),
            &jalali.to_string(),
        ));
        self.console.print_line(&self.frame.bottom());
        self.console.print_line("");
    }
}
