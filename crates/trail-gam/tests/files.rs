//! Reading and writing save files on disk.

use std::fs;

use trail_gam::{
    EncodeOptions, GamError, RECORD_LEN, Record, SaveReader, SaveWriter, read_save, write_save,
    write_save_with_options,
};

#[test]
fn test_write_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.gam");

    let mut record = Record::defaults();
    record.set("Leader", "Ezra").unwrap();
    record.set("PartyMember1", "Mary").unwrap();
    record.set("OccupationValue", 4).unwrap();
    record.set("MoneyInCents", 160_000).unwrap();
    record.set("Year", 1848).unwrap();
    write_save(&path, &record).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), RECORD_LEN as u64);
    let read_back = read_save(&path).unwrap();
    assert_eq!(read_back, record);
    assert_eq!(read_back.annotation("OccupationValue"), Some("Farmer"));
}

#[test]
fn test_reader_and_writer_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("party.gam");

    SaveWriter::create(&path)
        .unwrap()
        .write_record(&Record::defaults())
        .unwrap();
    let record = SaveReader::open(&path).unwrap().read_record().unwrap();
    assert_eq!(record, Record::defaults());
}

#[test]
fn test_failed_encode_keeps_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.gam");
    write_save(&path, &Record::defaults()).unwrap();

    let mut bad = Record::defaults();
    bad.set("GameTitle", "The Oregon Trail for Windows 95").unwrap();
    let result = write_save(&path, &bad);
    assert!(matches!(result, Err(GamError::ValueTooLong { .. })));
    assert_eq!(read_save(&path).unwrap(), Record::defaults());

    write_save_with_options(&path, &bad, &EncodeOptions::new().truncating()).unwrap();
    let truncated = read_save(&path).unwrap();
    assert_eq!(
        truncated.text("GameTitle").unwrap().as_str(),
        "The Oregon Trail for Windows"
    );
}

#[test]
fn test_read_wrong_size_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.gam");
    fs::write(&path, vec![0u8; 256]).unwrap();
    assert!(matches!(
        read_save(&path),
        Err(GamError::SizeMismatch {
            expected: RECORD_LEN,
            actual: 256
        })
    ));
}
