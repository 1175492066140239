// A required field must fail when unset, so a default is rejected.

use backendconf::Profile;

#[derive(Profile)]
#[allow(dead_code)]
struct Config {
    #[conf(name = "HTTP_PORT", required, default = "8080")]
    pub port: String,
}

fn main() {}
