use {
    crate::prelude::*,
    colored::ColoredString,
    fasapay_sdk::{ErrorDetail, RawResponse},
    std::io::Write,
};

/// How much of an undecodable response body is shown.
pub(crate) const RAW_PREVIEW_LEN: usize = 200;

/// Print a grey colored line to separate sections
pub(crate) fn separator() -> ColoredString {
    "\n-=-=-=-=-=-=-=-".truecolor(100, 100, 100)
}

/// Print the title of the currently executed command.
#[macro_export]
macro_rules! command_title {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "\n{arrow} {title}{separator}",
                arrow = "▶".bold().purple(),
                title = format!($($args)*).bold(),
                separator = $crate::display::separator()
            );
        }
    };
}

/// Notify the user of a successful operation. Same as [`println!`] but
/// silent in [`JSON_MODE`] and with success formatting.
#[macro_export]
macro_rules! notify_success {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "[{check}] {msg}",
                check = "✔".green().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Similar to [`notify_success!`] but for errors.
#[macro_export]
macro_rules! notify_error {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            eprintln!(
                "[{ballot}] {msg}",
                ballot = "✘".red().bold(),
                msg = format!($($args)*)
            );
        }
    };
}

/// Formatted list item.
#[macro_export]
macro_rules! item {
    ($($args:tt)*) => {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "    {arrow} {item}",
                arrow = "▶".truecolor(100, 100, 100),
                item = format!($($args)*)
            );
        }
    };
}

/// Print a pending state for a request. Returns a [`LoadingHandle`] that
/// settles it as success or error.
#[macro_export]
macro_rules! loading {
    ($($args:tt)*) => {
        $crate::display::LoadingHandle::start(format!($($args)*))
    };
}

/// A pending request line, see [`loading!`].
pub(crate) struct LoadingHandle {
    message: String,
}

impl LoadingHandle {
    pub(crate) fn start(message: String) -> Self {
        if !JSON_MODE.load(Ordering::Relaxed) {
            print!("[{dots}] {message}", dots = "…".purple());

            // A failed flush only delays the line.
            let _ = std::io::stdout().flush();
        }

        Self { message }
    }

    /// Mark the request as successful.
    pub(crate) fn success(self) {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "\r[{check}] {message}",
                check = "✔".green().bold(),
                message = self.message
            );
        }
    }

    /// Mark the request as errored.
    pub(crate) fn error(self) {
        if !JSON_MODE.load(Ordering::Relaxed) {
            println!(
                "\r[{ballot}] {message}",
                ballot = "✘".red().bold(),
                message = self.message
            );
        }
    }
}

/// If [`JSON_MODE`] is enabled, output the given data as JSON.
pub(crate) fn json_output<T: Serialize>(data: &T) -> AnyResult<(), FasapayCliError> {
    if !JSON_MODE.load(Ordering::Relaxed) {
        return Ok(());
    }

    match serde_json::to_string_pretty(data) {
        Ok(json) => {
            println!("{}", json);

            Ok(())
        }
        Err(e) => Err(FasapayCliError::Any(e.into())),
    }
}

/// `1,250.5 IDR` style amount.
pub(crate) fn format_amount(amount: f64, currency: &str) -> String {
    let rendered = amount.to_string();
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    let mut grouped = String::new();

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    let amount = match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    };

    match currency {
        "" => amount,
        currency => format!("{amount} {currency}"),
    }
}

/// One line for an `<errors>` entry: `[code] attribute: message (detail)`.
pub(crate) fn format_error_detail(detail: &ErrorDetail) -> String {
    let mut line = String::new();

    if let Some(code) = detail.code {
        line.push_str(&format!("[{code}] "));
    }

    if let Some(attribute) = &detail.attribute {
        line.push_str(&format!("{attribute}: "));
    }

    line.push_str(&detail.message);

    if let Some(detail) = &detail.detail {
        line.push_str(&format!(" ({detail})"));
    }

    line
}

/// The first [`RAW_PREVIEW_LEN`] characters of a response body.
pub(crate) fn raw_preview(raw: &RawResponse) -> String {
    let text = raw.text();
    let mut preview = text.chars().take(RAW_PREVIEW_LEN).collect::<String>();

    if text.chars().count() > RAW_PREVIEW_LEN {
        preview.push('…');
    }

    preview
}
