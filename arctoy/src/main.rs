fn main() {
    arctoy::main()
}
