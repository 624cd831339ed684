use std::fmt;

/// A message about to be handed to the relay. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl fmt::Display for OutgoingEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Email:")?;
        writeln!(f, "  From: {}", self.from)?;
        writeln!(f, "  To: {}", self.to)?;
        writeln!(f, "  Subject: {}", self.subject)?;
        writeln!(f, "  Body: {} chars", self.body.chars().count())?;
        Ok(())
    }
}
