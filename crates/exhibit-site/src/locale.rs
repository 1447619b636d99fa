//! Interface strings.

/// Translatable interface message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Message {
    /// Tooltip of the edit link next to the page title.
    EditOnRepository,
    /// Examples tab label.
    ExamplesTab,
    /// API tab label.
    ApiTab,
    /// Design tab label.
    DesignTab,
    /// Heading of the not-found page.
    NotFoundTitle,
    /// Body of the not-found page.
    NotFoundText,
}

/// String table for one language.
///
/// Languages without a table fall back to English.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    chinese: bool,
}

impl Locale {
    #[must_use]
    pub fn new(lang: &str) -> Self {
        Self {
            chinese: lang == "zh" || lang.starts_with("zh-"),
        }
    }

    /// Look up a message.
    pub fn text(self, message: Message) -> &'static str {
        if self.chinese {
            match message {
                Message::EditOnRepository => "在 GitHub 上编辑",
                Message::ExamplesTab => "代码演示",
                Message::ApiTab => "API",
                Message::DesignTab => "设计指引",
                Message::NotFoundTitle => "页面不存在",
                Message::NotFoundText => "没有找到与该地址对应的示例。",
            }
        } else {
            match message {
                Message::EditOnRepository => "Edit on GitHub",
                Message::ExamplesTab => "Examples",
                Message::ApiTab => "API",
                Message::DesignTab => "Design Guide",
                Message::NotFoundTitle => "Page not found",
                Message::NotFoundText => "No example matches this address.",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_strings() {
        let locale = Locale::new("en");
        assert_eq!(locale.text(Message::EditOnRepository), "Edit on GitHub");
        assert_eq!(locale.text(Message::DesignTab), "Design Guide");
    }

    #[test]
    fn test_chinese_strings() {
        let locale = Locale::new("zh");
        assert_eq!(locale.text(Message::EditOnRepository), "在 GitHub 上编辑");
        assert_eq!(Locale::new("zh-CN").text(Message::ExamplesTab), "代码演示");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        assert_eq!(Locale::new("fr").text(Message::ExamplesTab), "Examples");
    }
}
