// An Option<T> field that must be set should be declared without Option.

use backendconf::Profile;

#[derive(Profile)]
#[allow(dead_code)]
struct Config {
    #[conf(name = "REGION", required)]
    pub region: Option<String>,
}

fn main() {}
