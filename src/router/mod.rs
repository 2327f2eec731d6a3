//! Request routing.
//!
//! Requests are dispatched on the first path segment (the text between the
//! first and second `/`). The table below is the whole route set; anything
//! not in it, and any target that does not start with `/`, is a 404.
//!
//! | Segment      | Endpoint                       |
//! |--------------|--------------------------------|
//! | `""`         | root, 200 with empty body      |
//! | `echo`       | second segment as body         |
//! | `user-agent` | `User-Agent` header as body    |
//! | `files`      | GET / POST under the directory |

pub mod encoding;
pub mod handlers;

use std::collections::HashMap;
use std::path::PathBuf;

use crate::http::request::HttpRequest;
use crate::http::response::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Root,
    Echo,
    UserAgent,
    Files,
}

pub struct Router {
    routes: HashMap<&'static str, Endpoint>,
    directory: Option<PathBuf>,
}

impl Router {
    /// Builds the route table. `directory` is the root for `/files/...`;
    /// without it those routes answer 404.
    pub fn new(directory: Option<PathBuf>) -> Self {
        let routes = HashMap::from([
            ("", Endpoint::Root),
            ("echo", Endpoint::Echo),
            ("user-agent", Endpoint::UserAgent),
            ("files", Endpoint::Files),
        ]);

        Self { routes, directory }
    }

    pub fn directory(&self) -> Option<&std::path::Path> {
        self.directory.as_deref()
    }

    /// Looks up the endpoint for a request without running it.
    pub fn resolve(&self, req: &HttpRequest) -> Option<Endpoint> {
        let key = req.segments()?.next().unwrap_or_default();
        self.routes.get(key).copied()
    }

    pub async fn dispatch(&self, req: &HttpRequest) -> Response {
        match self.resolve(req) {
            Some(Endpoint::Root) => handlers::root(req),
            Some(Endpoint::Echo) => handlers::echo(req),
            Some(Endpoint::UserAgent) => handlers::user_agent(req),
            Some(Endpoint::Files) => handlers::files(req, self.directory()).await,
            None => Response::not_found(),
        }
    }
}
