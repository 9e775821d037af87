//! Route tables and route resolution for nested command-line tools.
//!
//! `switchyard-dispatch` knows nothing about what a command is. It stores
//! leaves of any type `L` in a tree of [`RouteTable`]s and resolves an
//! argument vector to the leaf (or group) it names, splitting off the tokens
//! the leaf should bind.
//!
//! # Resolution
//!
//! ```rust
//! use switchyard_dispatch::{RouteTable, Router};
//!
//! let routes = RouteTable::new()
//!     .group("deploy", RouteTable::new().leaf("staging", "deploy-staging")?)?;
//! let router = Router::new(routes);
//!
//! let res = router.route(&["deploy", "staging", "--force"])?;
//! assert_eq!(res.target.leaf(), Some(&"deploy-staging"));
//! assert_eq!(res.remaining, vec!["--force"]);
//! assert_eq!(res.route_path, vec!["deploy", "staging"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Tokens with a leading hyphen are never route segments. When the input
//! runs out of segments before a leaf, the resolution targets the table it
//! stopped in, which callers typically answer with that group's help.

mod error;
mod path;
mod router;
mod table;

pub use error::{RouteError, RouteTableError};
pub use path::{is_segment_token, join_path, path_to_string, remove_segment, string_to_path};
pub use router::{resolve, Resolution, Router, Target};
pub use table::{RouteNode, RouteTable};
