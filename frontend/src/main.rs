//! Binary entrypoint for the console. Everything interesting happens in the
//! library crate; this only mounts it.

fn main() {
	frontend::render();
}
