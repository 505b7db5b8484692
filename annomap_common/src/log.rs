/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use tracing_subscriber::EnvFilter;

/*
 * we intercept logging/tracing macros here to have a central place where we can remove/replace them
 */

#[macro_export]
macro_rules! trace {
    ( $($t:tt)* ) => { $crate::tracing::trace!( $($t)* ) }
}

#[macro_export]
macro_rules! debug {
    ( $($t:tt)* ) => { $crate::tracing::debug!( $($t)* ) }
}

#[macro_export]
macro_rules! info {
    ( $($t:tt)* ) => { $crate::tracing::info!( $($t)* ) }
}

#[macro_export]
macro_rules! warn {
    ( $($t:tt)* ) => { $crate::tracing::warn!( $($t)* ) }
}

#[macro_export]
macro_rules! error {
    ( $($t:tt)* ) => { $crate::tracing::error!( $($t)* ) }
}

/// install a fmt subscriber that uses RUST_LOG if set, `default_directive` otherwise.
/// Note this only succeeds if there is no global subscriber set yet, which is why we return a bool
pub fn init_tracing (default_directive: &str)->bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
