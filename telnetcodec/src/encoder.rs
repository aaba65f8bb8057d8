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
use bytes::{BufMut, BytesMut};
use tokio_util::codec::Encoder;

/// Encoder for outbound application data.
///
/// Every `IAC` byte in the payload is doubled so the peer reads it as data rather than as the
/// start of a command. Payload bytes are otherwise copied unchanged.
///
/// ```
/// use bytes::BytesMut;
/// use telnetkit_codec::IacEncoder;
/// use tokio_util::codec::Encoder;
///
/// let mut dst = BytesMut::new();
/// IacEncoder.encode(&b"a\xFFb"[..], &mut dst).unwrap();
/// assert_eq!(&dst[..], b"a\xFF\xFFb");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct IacEncoder;

impl Encoder<&[u8]> for IacEncoder {
    type Error = std::io::Error;

    fn encode(&mut self, item: &[u8], dst: &mut BytesMut) -> Result<(), Self::Error> {
        escape_into(item, dst);
        Ok(())
    }
}

fn escape_into(item: &[u8], dst: &mut BytesMut) {
    let escapes = item.iter().filter(|&&byte| byte == consts::IAC).count();
    dst.reserve(item.len() + escapes);
    if escapes == 0 {
        dst.put_slice(item);
        return;
    }
    for &byte in item {
        if byte == consts::IAC {
            dst.put_u8(consts::IAC);
        }
        dst.put_u8(byte);
    }
}

/// Escape a payload into a fresh buffer.
pub fn escape_iac(data: &[u8]) -> BytesMut {
    let mut dst = BytesMut::new();
    escape_into(data, &mut dst);
    dst
}
