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

//! Telnet command octets and option codes (RFC 854, RFC 855 and the IANA option registry).

/// Default TCP port of the Telnet service.
pub const TELNET_PORT: u16 = 23;

/// Null byte, dropped from the data stream.
pub const NUL: u8 = 0;
/// Legacy XON flow-control byte, dropped from the data stream.
pub const XON: u8 = 0x11;
/// Carriage Return
pub const CR: u8 = 13;
/// Line Feed
pub const LF: u8 = 10;

/// Subnegotiation End
pub const SE: u8 = 240;
/// No Operation
pub const NOP: u8 = 241;
/// Data Mark
pub const DM: u8 = 242;
/// Break
pub const BRK: u8 = 243;
/// Interrupt Process
pub const IP: u8 = 244;
/// Abort Output
pub const AO: u8 = 245;
/// Are You There
pub const AYT: u8 = 246;
/// Erase Character
pub const EC: u8 = 247;
/// Erase Line
pub const EL: u8 = 248;
/// Go Ahead
pub const GA: u8 = 249;
/// Subnegotiation Begin
pub const SB: u8 = 250;
/// WILL (option code)
pub const WILL: u8 = 251;
/// WON'T (option code)
pub const WONT: u8 = 252;
/// DO (option code)
pub const DO: u8 = 253;
/// DON'T (option code)
pub const DONT: u8 = 254;
/// Interpret As Command
pub const IAC: u8 = 255;

/// Option byte handed to negotiation handlers for single byte commands.
pub const NOOPT: u8 = 0;

/// Telnet option codes.
pub mod option {
    /// 8-bit data path
    pub const BINARY: u8 = 0;
    /// Echo
    pub const ECHO: u8 = 1;
    /// Prepare to reconnect
    pub const RCP: u8 = 2;
    /// Suppress go ahead
    pub const SGA: u8 = 3;
    /// Approximate message size
    pub const NAMS: u8 = 4;
    /// Give status
    pub const STATUS: u8 = 5;
    /// Timing mark
    pub const TM: u8 = 6;
    /// Remote controlled transmission and echo
    pub const RCTE: u8 = 7;
    /// Negotiate about output line width
    pub const NAOL: u8 = 8;
    /// Negotiate about output page size
    pub const NAOP: u8 = 9;
    /// Negotiate about CR disposition
    pub const NAOCRD: u8 = 10;
    /// Negotiate about horizontal tabstops
    pub const NAOHTS: u8 = 11;
    /// Negotiate about horizontal tab disposition
    pub const NAOHTD: u8 = 12;
    /// Negotiate about formfeed disposition
    pub const NAOFFD: u8 = 13;
    /// Negotiate about vertical tab stops
    pub const NAOVTS: u8 = 14;
    /// Negotiate about vertical tab disposition
    pub const NAOVTD: u8 = 15;
    /// Negotiate about output LF disposition
    pub const NAOLFD: u8 = 16;
    /// Extended ascii character set
    pub const XASCII: u8 = 17;
    /// Force logout
    pub const LOGOUT: u8 = 18;
    /// Byte macro
    pub const BM: u8 = 19;
    /// Data entry terminal
    pub const DET: u8 = 20;
    /// SUPDUP protocol
    pub const SUPDUP: u8 = 21;
    /// SUPDUP output
    pub const SUPDUP_OUTPUT: u8 = 22;
    /// Send location
    pub const SNDLOC: u8 = 23;
    /// Terminal type
    pub const TTYPE: u8 = 24;
    /// End of record
    pub const EOR: u8 = 25;
    /// TACACS user identification
    pub const TUID: u8 = 26;
    /// Output marking
    pub const OUTMRK: u8 = 27;
    /// Terminal location number
    pub const TTYLOC: u8 = 28;
    /// 3270 regime
    pub const VT3270REGIME: u8 = 29;
    /// X.3 PAD
    pub const X3PAD: u8 = 30;
    /// Window size
    pub const NAWS: u8 = 31;
    /// Terminal speed
    pub const TSPEED: u8 = 32;
    /// Remote flow control
    pub const LFLOW: u8 = 33;
    /// Linemode option
    pub const LINEMODE: u8 = 34;
    /// X Display Location
    pub const XDISPLOC: u8 = 35;
    /// Old environment variables
    pub const OLD_ENVIRON: u8 = 36;
    /// Authenticate
    pub const AUTHENTICATION: u8 = 37;
    /// Encryption option
    pub const ENCRYPT: u8 = 38;
    /// New environment variables
    pub const NEW_ENVIRON: u8 = 39;
    /// TN3270E
    pub const TN3270E: u8 = 40;
    /// XAUTH
    pub const XAUTH: u8 = 41;
    /// CHARSET
    pub const CHARSET: u8 = 42;
    /// Telnet Remote Serial Port
    pub const RSP: u8 = 43;
    /// Com Port Control Option
    pub const COM_PORT_OPTION: u8 = 44;
    /// Telnet Suppress Local Echo
    pub const SUPPRESS_LOCAL_ECHO: u8 = 45;
    /// Telnet Start TLS
    pub const TLS: u8 = 46;
    /// KERMIT
    pub const KERMIT: u8 = 47;
    /// SEND-URL
    pub const SEND_URL: u8 = 48;
    /// FORWARD_X
    pub const FORWARD_X: u8 = 49;
    /// TELOPT PRAGMA LOGON
    pub const PRAGMA_LOGON: u8 = 138;
    /// TELOPT SSPI LOGON
    pub const SSPI_LOGON: u8 = 139;
    /// TELOPT PRAGMA HEARTBEAT
    pub const PRAGMA_HEARTBEAT: u8 = 140;
    /// Extended-Options-List
    pub const EXOPL: u8 = 255;
}
