//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::consts;
use std::fmt::Formatter;

///
/// `TelnetCommand` names the octet following an IAC.
///
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TelnetCommand {
    /// End of subnegotiation parameters.
    SubnegotiationEnd,
    /// No Operation
    NoOperation,
    /// End of urgent Data Stream
    DataMark,
    /// Operator pressed the Break key or the Attention key.
    Break,
    /// Interrupt current process.
    InterruptProcess,
    /// Cancel output from the current process.
    AbortOutput,
    /// Request acknowledgment.
    AreYouThere,
    /// Request that the operator erase the previous character.
    EraseCharacter,
    /// Request that the operator erase the previous line.
    EraseLine,
    /// End of input for half-duplex connections.
    GoAhead,
    /// Start of subnegotiation parameters.
    SubnegotiationBegin,
    /// Offer to enable an option locally.
    Will,
    /// Refuse or disable an option locally.
    Wont,
    /// Request the other party enable an option.
    Do,
    /// Request the other party disable an option.
    Dont,
    /// Escaped data byte 0xFF.
    InterpretAsCommand,
    /// Any other octet.
    Unknown(u8),
}

impl TelnetCommand {
    /// Command octet as sent on the wire.
    pub fn to_u8(&self) -> u8 {
        match self {
            TelnetCommand::SubnegotiationEnd => consts::SE,
            TelnetCommand::NoOperation => consts::NOP,
            TelnetCommand::DataMark => consts::DM,
            TelnetCommand::Break => consts::BRK,
            TelnetCommand::InterruptProcess => consts::IP,
            TelnetCommand::AbortOutput => consts::AO,
            TelnetCommand::AreYouThere => consts::AYT,
            TelnetCommand::EraseCharacter => consts::EC,
            TelnetCommand::EraseLine => consts::EL,
            TelnetCommand::GoAhead => consts::GA,
            TelnetCommand::SubnegotiationBegin => consts::SB,
            TelnetCommand::Will => consts::WILL,
            TelnetCommand::Wont => consts::WONT,
            TelnetCommand::Do => consts::DO,
            TelnetCommand::Dont => consts::DONT,
            TelnetCommand::InterpretAsCommand => consts::IAC,
            TelnetCommand::Unknown(byte) => *byte,
        }
    }

    /// Parses a command octet.
    pub fn from_u8(byte: u8) -> Self {
        match byte {
            consts::SE => TelnetCommand::SubnegotiationEnd,
            consts::NOP => TelnetCommand::NoOperation,
            consts::DM => TelnetCommand::DataMark,
            consts::BRK => TelnetCommand::Break,
            consts::IP => TelnetCommand::InterruptProcess,
            consts::AO => TelnetCommand::AbortOutput,
            consts::AYT => TelnetCommand::AreYouThere,
            consts::EC => TelnetCommand::EraseCharacter,
            consts::EL => TelnetCommand::EraseLine,
            consts::GA => TelnetCommand::GoAhead,
            consts::SB => TelnetCommand::SubnegotiationBegin,
            consts::WILL => TelnetCommand::Will,
            consts::WONT => TelnetCommand::Wont,
            consts::DO => TelnetCommand::Do,
            consts::DONT => TelnetCommand::Dont,
            consts::IAC => TelnetCommand::InterpretAsCommand,
            byte => TelnetCommand::Unknown(byte),
        }
    }

    /// True for DO, DONT, WILL and WONT, the commands followed by an option byte.
    pub fn is_negotiation(&self) -> bool {
        matches!(
            self,
            TelnetCommand::Do | TelnetCommand::Dont | TelnetCommand::Will | TelnetCommand::Wont
        )
    }
}

impl std::fmt::Display for TelnetCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TelnetCommand::SubnegotiationEnd => write!(f, "SE"),
            TelnetCommand::NoOperation => write!(f, "NOP"),
            TelnetCommand::DataMark => write!(f, "DM"),
            TelnetCommand::Break => write!(f, "BRK"),
            TelnetCommand::InterruptProcess => write!(f, "IP"),
            TelnetCommand::AbortOutput => write!(f, "AO"),
            TelnetCommand::AreYouThere => write!(f, "AYT"),
            TelnetCommand::EraseCharacter => write!(f, "EC"),
            TelnetCommand::EraseLine => write!(f, "EL"),
            TelnetCommand::GoAhead => write!(f, "GA"),
            TelnetCommand::SubnegotiationBegin => write!(f, "SB"),
            TelnetCommand::Will => write!(f, "WILL"),
            TelnetCommand::Wont => write!(f, "WONT"),
            TelnetCommand::Do => write!(f, "DO"),
            TelnetCommand::Dont => write!(f, "DONT"),
            TelnetCommand::InterpretAsCommand => write!(f, "IAC"),
            TelnetCommand::Unknown(byte) => write!(f, "{byte}"),
        }
    }
}

impl From<u8> for TelnetCommand {
    fn from(byte: u8) -> Self {
        Self::from_u8(byte)
    }
}

impl From<TelnetCommand> for u8 {
    fn from(command: TelnetCommand) -> Self {
        command.to_u8()
    }
}
