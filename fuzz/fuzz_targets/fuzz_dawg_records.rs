#![no_main]

use libfuzzer_sys::fuzz_target;
use wordgrid::dawg::DawgReader;

fuzz_target!(|data: &[u8]| {
    // Tables with dangling links or unterminated lists must not panic
    let Ok(reader) = DawgReader::from_bytes(data.to_vec()) else {
        return;
    };
    for prefix in ["", "a", "qu", "cat", "zzzz"] {
        let children = reader.children(prefix);
        for letter in ['a', 'e', 's', '$'] {
            assert_eq!(reader.has_child(prefix, letter), children.contains(&letter));
        }
        let _ = reader.is_word(prefix);
    }
});
