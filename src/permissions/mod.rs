//! Locale permission helpers
//!
//! Admin surfaces filter which locales a principal may view or edit. A
//! principal declares its capabilities explicitly; resolution happens once
//! per request and falls back to the engine's default locale when a
//! principal declares nothing.

/// A locale-related capability a principal may declare
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleCapability {
    /// Locales the principal can see and edit unless narrowed further
    Available(Vec<String>),
    /// Locales the principal may view
    Viewable(Vec<String>),
    /// Locales the principal may edit
    Editable(Vec<String>),
}

/// A caller-supplied principal (user, service account, ...) whose declared
/// capabilities drive locale filtering
pub trait Principal {
    /// The capabilities this principal declares; an empty list means
    /// "nothing declared" and resolves to the default locale
    fn locale_capabilities(&self) -> Vec<LocaleCapability>;
}

/// Resolve the locales a principal may view.
///
/// Precedence: an explicit viewable list, then the available list, then the
/// default locale alone.
pub fn viewable_locales(principal: &dyn Principal, default_locale: &str) -> Vec<String> {
    let capabilities = principal.locale_capabilities();

    for capability in &capabilities {
        if let LocaleCapability::Viewable(locales) = capability {
            return locales.clone();
        }
    }
    for capability in &capabilities {
        if let LocaleCapability::Available(locales) = capability {
            return locales.clone();
        }
    }

    vec![default_locale.to_string()]
}

/// Resolve the locales a principal may edit.
///
/// Precedence: an explicit editable list, then the available list, then the
/// default locale alone.
pub fn editable_locales(principal: &dyn Principal, default_locale: &str) -> Vec<String> {
    let capabilities = principal.locale_capabilities();

    for capability in &capabilities {
        if let LocaleCapability::Editable(locales) = capability {
            return locales.clone();
        }
    }
    for capability in &capabilities {
        if let LocaleCapability::Available(locales) = capability {
            return locales.clone();
        }
    }

    vec![default_locale.to_string()]
}
