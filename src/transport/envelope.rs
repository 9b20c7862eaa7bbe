//! Response envelope: the error list and completion flag every command
//! response carries.

use std::collections::BTreeMap;

use super::xml::XmlElement;

const ERR_COUNT: &str = "ErrCount";
const ERR_PREFIX: &str = "Err";
const DONE: &str = "Done";
const MAX_PADDED_ERRORS: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("registrar reported errors: {messages:?}")]
    Response { messages: Vec<String> },

    #[error("registrar response is not done")]
    Incomplete { document: Box<XmlElement> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A response whose envelope reported no errors and a finished command.
pub struct Response {
    root: XmlElement,
}

impl Response {
    /// The command's root response element (`interface-response`).
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn into_root(self) -> XmlElement {
        self.root
    }
}

/// Check the error count first, then the completion flag.
///
/// Both nodes are located anywhere in the document because their depth
/// varies by command. A response with errors fails with
/// [`EnvelopeError::Response`] even when it also reports `Done=true`.
pub fn validate(document: XmlElement) -> Result<Response, EnvelopeError> {
    let err_count = document
        .find_text(ERR_COUNT)
        .and_then(|text| text.parse::<usize>().ok())
        .unwrap_or(0);

    if err_count > 0 {
        let messages = error_messages(&document, err_count);
        return Err(EnvelopeError::Response { messages });
    }

    let done = document
        .find_text(DONE)
        .is_some_and(|text| text.eq_ignore_ascii_case("true"));
    if !done {
        return Err(EnvelopeError::Incomplete {
            document: Box::new(document),
        });
    }

    Ok(Response { root: document })
}

/// `Err1..ErrN` texts for an `ErrCount` of `count`, gathered in one walk.
///
/// Missing indices read as empty strings. Padding stops at
/// [`MAX_PADDED_ERRORS`] past the highest index actually present, so a bogus
/// count cannot blow up the list.
fn error_messages(document: &XmlElement, count: usize) -> Vec<String> {
    let mut found = BTreeMap::new();
    collect_errors(document, &mut found);
    // Direct children of the root shadow nested nodes of the same name.
    for child in document.children() {
        if let Some(idx) = error_index(child.name()) {
            found.insert(idx, child.text().trim());
        }
    }

    let highest = found.keys().next_back().copied().unwrap_or(0);
    let len = count.min(highest.max(MAX_PADDED_ERRORS));
    (1..=len)
        .map(|idx| found.get(&idx).copied().unwrap_or_default().to_owned())
        .collect()
}

fn collect_errors<'a>(element: &'a XmlElement, found: &mut BTreeMap<usize, &'a str>) {
    if let Some(idx) = error_index(element.name()) {
        found.entry(idx).or_insert_with(|| element.text().trim());
    }
    for child in element.children() {
        collect_errors(child, found);
    }
}

/// `Err7` → `7`. Zero and zero-padded indices do not count.
fn error_index(name: &str) -> Option<usize> {
    let digits = name.strip_prefix(ERR_PREFIX)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}
