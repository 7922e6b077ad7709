fn main() {
    passbook_lib::run()
}
