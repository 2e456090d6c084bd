//! Line-oriented command parsing for the demo.
//!
//! Malformed numeric input is reported as a parse error and the caller
//! treats it exactly like a rejected action: clear the line, log at debug
//! level, show nothing.

use rust_decimal::Decimal;

/// One user-triggered event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `login <username> <pin>`
    Login {
        /// Supplied login handle.
        username: String,
        /// Supplied PIN.
        pin: u32,
    },
    /// `transfer <username> <amount>`
    Transfer {
        /// Destination login handle.
        to: String,
        /// Amount to move.
        amount: Decimal,
    },
    /// `loan <amount>`
    Loan {
        /// Requested amount.
        amount: Decimal,
    },
    /// `close <username> <pin>`
    Close {
        /// Confirmation login handle.
        username: String,
        /// Confirmation PIN.
        pin: u32,
    },
    /// `sort` - toggle between natural and ascending display order.
    Sort,
    /// `logout`
    Logout,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Why a line did not produce a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line was empty.
    Empty,
    /// The verb is not one we know.
    UnknownCommand(String),
    /// The verb is known but its arguments are missing or malformed.
    BadArguments,
}

impl Command {
    /// Parses one input line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut parts = line.split_whitespace();
        let verb = parts.next().ok_or(ParseError::Empty)?;
        let args: Vec<&str> = parts.collect();

        match verb.to_lowercase().as_str() {
            "login" => {
                let &[username, pin] = args.as_slice() else {
                    return Err(ParseError::BadArguments);
                };
                let pin = pin.parse().map_err(|_| ParseError::BadArguments)?;
                Ok(Self::Login {
                    username: username.to_string(),
                    pin,
                })
            }
            "transfer" => {
                let &[to, amount] = args.as_slice() else {
                    return Err(ParseError::BadArguments);
                };
                let amount = amount.parse().map_err(|_| ParseError::BadArguments)?;
                Ok(Self::Transfer {
                    to: to.to_string(),
                    amount,
                })
            }
            "loan" => {
                let &[amount] = args.as_slice() else {
                    return Err(ParseError::BadArguments);
                };
                let amount = amount.parse().map_err(|_| ParseError::BadArguments)?;
                Ok(Self::Loan { amount })
            }
            "close" => {
                let &[username, pin] = args.as_slice() else {
                    return Err(ParseError::BadArguments);
                };
                let pin = pin.parse().map_err(|_| ParseError::BadArguments)?;
                Ok(Self::Close {
                    username: username.to_string(),
                    pin,
                })
            }
            "sort" => Ok(Self::Sort),
            "logout" => Ok(Self::Logout),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}
