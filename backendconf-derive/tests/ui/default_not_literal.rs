// Defaults go through the same conversion as environment values,
// so they must be written as string literals.

use backendconf::Profile;

#[derive(Profile)]
#[allow(dead_code)]
struct Config {
    #[conf(default = 8080)]
    pub port: u16,
}

fn main() {}
