// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for arrays of angles that can't be used together.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Arrays with shapes {left:?} and {right:?} can't be broadcast together")]
pub struct BroadcastError {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl BroadcastError {
    pub(crate) fn new(left: &[usize], right: &[usize]) -> BroadcastError {
        BroadcastError {
            left: left.to_vec(),
            right: right.to_vec(),
        }
    }
}
