fn main() {
    turtle::term::main();
}
