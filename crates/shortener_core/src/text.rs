/// Language for every fixed string the form shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl Locale {
    pub fn text(self) -> &'static UiText {
        match self {
            Locale::English => &ENGLISH,
            Locale::Korean => &KOREAN,
        }
    }

    /// Parses a language tag such as `en`, `ko` or `ko-KR`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Some(Locale::English)
        } else if primary.eq_ignore_ascii_case("ko") {
            Some(Locale::Korean)
        } else {
            None
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UiText {
    pub title: &'static str,
    pub input_label: &'static str,
    pub input_placeholder: &'static str,
    pub submit: &'static str,
    pub submitting: &'static str,
    pub result_heading: &'static str,
    pub redirect: &'static str,
    pub copy: &'static str,
    /// The one failure message; it does not vary with the cause.
    pub create_failed: &'static str,
    pub input_missing: &'static str,
    pub input_not_a_url: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub open_failed: &'static str,
    pub howto_heading: &'static str,
    pub howto_steps: [&'static str; 3],
    pub quit: &'static str,
}

static ENGLISH: UiText = UiText {
    title: "URL Shortener",
    input_label: "Original URL",
    input_placeholder: "https://example.com",
    submit: "Shorten URL",
    submitting: "Processing...",
    result_heading: "Shortened URL",
    redirect: "Open",
    copy: "Copy",
    create_failed: "Failed to shorten the URL",
    input_missing: "Please enter a URL.",
    input_not_a_url: "Please enter a valid URL.",
    copied: "Link copied to clipboard.",
    copy_failed: "Could not copy to clipboard.",
    open_failed: "Could not open a browser.",
    howto_heading: "How to use:",
    howto_steps: [
        "Enter the original URL.",
        "Press the shorten button.",
        "Copy the generated short URL or press the open button.",
    ],
    quit: "Quit",
};

static KOREAN: UiText = UiText {
    title: "URL 단축 서비스",
    input_label: "원본 URL",
    input_placeholder: "https://example.com",
    submit: "URL 단축하기",
    submitting: "처리중...",
    result_heading: "단축된 URL",
    redirect: "이동하기",
    copy: "복사하기",
    create_failed: "URL 단축에 실패했습니다",
    input_missing: "URL을 입력하세요.",
    input_not_a_url: "올바른 URL 형식이 아닙니다.",
    copied: "링크를 클립보드에 복사했습니다.",
    copy_failed: "클립보드에 복사하지 못했습니다.",
    open_failed: "브라우저를 열지 못했습니다.",
    howto_heading: "사용 방법:",
    howto_steps: [
        "원본 URL을 입력합니다.",
        "단축하기 버튼을 클릭합니다.",
        "생성된 단축 URL을 복사하거나 이동하기 버튼을 클릭합니다.",
    ],
    quit: "종료",
};
