// Copyright 2023 The ROSA Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Debug;
use std::path::Path;

use config::Config;
use config::Environment;
use config::File;
use config::FileFormat;
use rosa_error::RosaError;
use rosa_error::RosaResult;
use serde::de::DeserializeOwned;

/// Parse a JSON configuration file.
///
/// A missing file is not an error: defaults from `C` apply. When `env_prefix` is given, variables
/// named `<PREFIX>_<FIELD>` override the values read from the file.
pub fn parse_config_file<C>(config_file: &Path, env_prefix: Option<&str>) -> RosaResult<C>
where
    C: Debug + DeserializeOwned,
{
    let mut builder = Config::builder().add_source(File::from(config_file).format(FileFormat::Json).required(false));
    if let Some(prefix) = env_prefix {
        builder = builder.add_source(Environment::with_prefix(prefix).try_parsing(true));
    }
    let cfg = builder.build().map_err(|e| RosaError::config(e.to_string()))?;
    let config = cfg
        .try_deserialize::<C>()
        .map_err(|e| RosaError::config(format!("{}: {e}", config_file.display())))?;
    Ok(config)
}
