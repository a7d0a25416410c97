//! User-facing notifications.

use std::fmt::{Display, Formatter, Result as FmtResult};

use mockall::automock;
use tracing::warn;

/// A failure message shown to the shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    /// The requested quantity is more than the stock service has available.
    StockExceeded,

    /// Adding a product failed.
    AddFailed,

    /// Removing a product failed.
    RemoveFailed,

    /// Changing a product's quantity failed.
    UpdateFailed,
}

impl Notice {
    /// The localized message shown to the shopper.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::StockExceeded => "Quantidade solicitada fora de estoque",
            Self::AddFailed => "Erro na adição do produto",
            Self::RemoveFailed => "Erro na remoção do produto",
            Self::UpdateFailed => "Erro na alteração de quantidade do produto",
        }
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.message())
    }
}

/// Channel for failure notices shown to the shopper.
#[automock]
pub trait Notifier: Send + Sync {
    /// Surface a failure to the shopper.
    fn error(&self, notice: Notice);
}

/// Notifier that emits every notice as a `tracing` warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, notice: Notice) {
        warn!(?notice, "{notice}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_have_distinct_messages() {
        let messages = [
            Notice::StockExceeded,
            Notice::AddFailed,
            Notice::RemoveFailed,
            Notice::UpdateFailed,
        ]
        .map(Notice::message);

        for (i, message) in messages.iter().enumerate() {
            assert!(
                messages.iter().skip(i + 1).all(|other| other != message),
                "duplicate notice message: {message}"
            );
        }
    }

    #[test]
    fn display_uses_localized_message() {
        assert_eq!(
            Notice::StockExceeded.to_string(),
            "Quantidade solicitada fora de estoque"
        );
    }
}
