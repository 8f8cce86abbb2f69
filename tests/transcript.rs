use std::io::Write;

use tempfile::NamedTempFile;

const EXPECTED_HEAD: &str = "
----------------------------------------------------------------------------------------------------

Example of calling a Function:
div(100, 20) = 5

Example of a Function With Optional and Named Parameters:
Passed parameters: { Smith 50}
Passed parameters: {Mary Smith 0}

Example of a Variadic Function:
addNums(1, 2, 3, 4, 5, 6, 7, 8, 9) = 45
addNums(21, 43, 65) = 129
addNums() = 0
nums = [10 20 30 40 50]
addNums(nums...) = 150

Example of Function With Multiple Return Values:
divmod(5, 2) => ResDiv = 2 ResMod = 1

Example of Function With Named Return Values:
divmodNamed(5, 2) => resX = 2 modY = 1

Example of Declaring a Function Variable:
myFuncVar(\"Hello\") using f1: 5
myFuncVar(\"Hello\") using f2: 500

";

const EXPECTED_TAIL: &str = "Example of defer With a cat Command:
hello from a file

Example of Using defer:
Exiting deferExample: 30
Second value: 20
First value: 10

Example of Call-By-Value:
2 Hello {0 }

Example of Map-Slice Modification Calls:
Before: mapMod = map[1:first 2:second]
After: mapMod = map[2:hello 3:goodbye]
Before: slcMod = [1 2 3]
After: slcMod = [2 4 6]

Defer in main() is called here

";

#[test]
fn full_run_produces_expected_transcript() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "hello from a file").unwrap();

    let mut buf = Vec::new();
    funcsampler::run(&mut buf, Some(file.path())).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert!(text.starts_with(EXPECTED_HEAD), "unexpected head:\n{text}");
    assert!(text.ends_with(EXPECTED_TAIL), "unexpected tail:\n{text}");
    assert_eq!(text.matches("Defer in main() is called here").count(), 1);

    for section in [
        "Example of a Simple Calculator With Functions:",
        "Example of Anonymous Function:",
        "Example of Closure:",
        "Example of Closure With Shadow:",
        "Example of Sorting Slice",
        "Example of Function That Returns a Closure:",
    ] {
        assert!(text.contains(section), "missing section {section}");
    }
    assert!(text.contains("Printing 4 from inside an anonymous function\n"));
    assert!(text.contains("Outside fa(), a = 30\n"));
    assert!(text.contains("Outside fb(), b = 20\n"));
}

#[test]
fn unreadable_path_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let mut buf = Vec::new();
    let err = funcsampler::run(&mut buf, Some(missing.as_path())).unwrap_err();
    assert!(format!("{err:#}").contains("nope.txt"));

    let text = String::from_utf8(buf).unwrap();
    assert!(!text.contains("Example of Using defer:"));
}
