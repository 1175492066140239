// Option<T> fields bind to None when unset, so a default is redundant.

use backendconf::Profile;

#[derive(Profile)]
#[allow(dead_code)]
struct Config {
    #[conf(default = "3")]
    pub replicas: Option<u8>,
}

fn main() {}
