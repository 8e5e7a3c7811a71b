// Copyright (c) 2025 vivo Mobile Communication Co., Ltd.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//       http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Errors reported by list and cursor operations.
///
/// Each variant marks a misuse that leaves the list unchanged.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ListError {
    /// The operation is not defined at the cursor's position, e.g.
    /// dereferencing before-begin or inserting after end.
    #[error("operation is not valid at this position")]
    InvalidOperation,

    /// There is no element where one is required, e.g. popping an empty
    /// list or advancing past end.
    #[error("position is out of range")]
    OutOfRange,
}

impl ListError {
    /// Reports a rejected operation and hands the error back.
    pub(crate) fn logged(self, op: &str) -> Self {
        log::debug!("forward_list: {} rejected: {}", op, self);
        self
    }
}
