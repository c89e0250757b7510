use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Display language. Persian is the default, as in the original toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Fa,
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Fa
    }
}

impl Lang {
    pub fn is_rtl(self) -> bool {
        matches!(self, Lang::Fa)
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Fa,
            Lang::Fa => Lang::En,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    MainMenu,
    AgeGregorian,
    AgeJalali,
    ConvertJ2G,
    ConvertG2J,
    Language,
    Exit,
    SelectPrompt,
    EnterBirthYear,
    EnterBirthGregorian,
    EnterBirthJalali,
    JalaliDatePrompt,
    GregorianDatePrompt,
    TryAnother,
    Goodbye,
    InvalidChoice,
    AgeCardTitle,
    BirthGregorian,
    AsOfGregorian,
    BirthJalali,
    AsOfJalali,
    Age,
    NextBirthdayGregorian,
    NextBirthdayJalali,
    In,
    LanguageMenuTitle,
    CurrentLanguage,
    SwitchTo,
    LangFa,
    LangEn,
    GregorianLabel,
    JalaliLabel,
}

pub fn tr(lang: Lang, msg: Msg) -> &'static str {
    use Msg::*;
    match (msg, lang) {
        (MainMenu, Lang::En) => "MAIN MENU",
        (MainMenu, Lang::Fa) => "منوی اصلی",
        (AgeGregorian, Lang::En) => "Calculate Age (Gregorian input)",
        (AgeGregorian, Lang::Fa) => "محاسبه سن (ورودی میلادی)",
        (AgeJalali, Lang::En) => "Calculate Age (Shamsi input)",
        (AgeJalali, Lang::Fa) => "محاسبه سن (ورودی شمسی)",
        (ConvertJ2G, Lang::En) => "Convert Shamsi → Gregorian",
        (ConvertJ2G, Lang::Fa) => "تبدیل شمسی → میلادی",
        (ConvertG2J, Lang::En) => "Convert Gregorian → Shamsi",
        (ConvertG2J, Lang::Fa) => "تبدیل میلادی → شمسی",
        (Language, Lang::En) => "Language",
        (Language, Lang::Fa) => "تغییر زبان",
        (Exit, Lang::En) => "Exit",
        (Exit, Lang::Fa) => "خروج",
        (SelectPrompt, Lang::En) => "Select an option [0-5]: ",
        (SelectPrompt, Lang::Fa) => "یک گزینه را انتخاب کنید [۰ تا ۵]: ",
        (EnterBirthYear, Lang::En) => "Enter your birth year: ",
        (EnterBirthYear, Lang::Fa) => "سال تولد خود را وارد کنید: ",
        (EnterBirthGregorian, Lang::En) => {
            "Enter birthdate (Gregorian) [YYYY-MM-DD] (or 'b' to go back): "
        }
        (EnterBirthGregorian, Lang::Fa) => {
            "تاریخ تولد (میلادی) را وارد کنید [YYYY-MM-DD] (یا b برای بازگشت): "
        }
        (EnterBirthJalali, Lang::En) => {
            "Enter birthdate (Jalali) [YYYY-MM-DD] (or 'b' to go back): "
        }
        (EnterBirthJalali, Lang::Fa) => {
            "تاریخ تولد (شمسی) را وارد کنید [YYYY-MM-DD] (یا b برای بازگشت): "
        }
        (JalaliDatePrompt, Lang::En) => "Jalali date [YYYY-MM-DD] (or 'b' to go back): ",
        (JalaliDatePrompt, Lang::Fa) => "تاریخ شمسی [YYYY-MM-DD] (یا b برای بازگشت): ",
        (GregorianDatePrompt, Lang::En) => "Gregorian date [YYYY-MM-DD] (or 'b' to go back): ",
        (GregorianDatePrompt, Lang::Fa) => "تاریخ میلادی [YYYY-MM-DD] (یا b برای بازگشت): ",
        (TryAnother, Lang::En) => "Try another date? [y/N]: ",
        (TryAnother, Lang::Fa) => "تاریخ دیگری امتحان شود؟ [y/N]: ",
        (Goodbye, Lang::En) => "Goodbye! 👋",
        (Goodbye, Lang::Fa) => "خدانگهدار! 👋",
        (InvalidChoice, Lang::En) => "Invalid choice. Please try again.",
        (InvalidChoice, Lang::Fa) => "گزینه نامعتبر است. دوباره امتحان کنید.",
        (AgeCardTitle, Lang::En) => "AGE CALCULATOR",
        (AgeCardTitle, Lang::Fa) => "محاسبه سن",
        (BirthGregorian, Lang::En) => "Birthdate (G)",
        (BirthGregorian, Lang::Fa) => "تولد (میلادی)",
        (AsOfGregorian, Lang::En) => "As of (G)",
        (AsOfGregorian, Lang::Fa) => "مبنا (میلادی)",
        (BirthJalali, Lang::En) => "Birthdate (J)",
        (BirthJalali, Lang::Fa) => "تولد (شمسی)",
        (AsOfJalali, Lang::En) => "As of (J)",
        (AsOfJalali, Lang::Fa) => "مبنا (شمسی)",
        (Age, Lang::En) => "Age",
        (Age, Lang::Fa) => "سن",
        (NextBirthdayGregorian, Lang::En) => "Next BD (G)",
        (NextBirthdayGregorian, Lang::Fa) => "تولد بعدی (میلادی)",
        (NextBirthdayJalali, Lang::En) => "Next BD (J)",
        (NextBirthdayJalali, Lang::Fa) => "تولد بعدی (شمسی)",
        (In, Lang::En) => "In",
        (In, Lang::Fa) => "در",
        (LanguageMenuTitle, Lang::En) => "LANGUAGE",
        (LanguageMenuTitle, Lang::Fa) => "زبان",
        (CurrentLanguage, Lang::En) => "Current",
        (CurrentLanguage, Lang::Fa) => "زبان فعلی",
        (SwitchTo, Lang::En) => "Switch to",
        (SwitchTo, Lang::Fa) => "تغییر به",
        (LangFa, Lang::En) => "Persian (فارسی)",
        (LangFa, Lang::Fa) => "فارسی",
        (LangEn, Lang::En) => "English",
        (LangEn, Lang::Fa) => "انگلیسی",
        (GregorianLabel, _) => "Gregorian / میلادی",
        (JalaliLabel, _) => "Jalali / شمسی",
    }
}

pub fn age_phrase(lang: Lang, years: i32, months: i32, days: i32) -> String {
    match lang {
        Lang::En => format!("{} years, {} months, {} days", years, months, days),
        Lang::Fa => format!("{} سال، {} ماه، {} روز", years, months, days),
    }
}

pub fn days_phrase(lang: Lang, days: i64) -> String {
    match lang {
        Lang::En => format!("{} days", days),
        Lang::Fa => format!("{} روز", days),
    }
}

pub fn error_phrase(lang: Lang, message: &str) -> String {
    match lang {
        Lang::En => format!("Error: {}", message),
        Lang::Fa => format!("خطا: {}", message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Lang::Fa.toggled(), Lang::En);
        assert_eq!(Lang::En.toggled(), Lang::Fa);
    }

    #[test]
    fn persian_is_rtl() {
        assert!(Lang::Fa.is_rtl());
        assert!(!Lang::En.is_rtl());
    }

    #[test]
    fn every_message_resolves_in_both_languages() {
        assert_eq!(tr(Lang::En, Msg::AgeCardTitle), "AGE CALCULATOR");
        assert_eq!(tr(Lang::Fa, Msg::MainMenu), "منوی اصلی");
        assert_eq!(age_phrase(Lang::En, 34, 5, 17), "34 years, 5 months, 17 days");
        assert_eq!(days_phrase(Lang::Fa, 58), "58 روز");
    }
}
