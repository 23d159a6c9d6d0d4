//! Trunk binary entry point for the browser bundle.

fn main() {
    #[cfg(feature = "csr")]
    shopscope::start();
}
