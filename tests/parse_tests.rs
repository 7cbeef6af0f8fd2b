// tests/parse_tests.rs

use macroquad_tmx::{parse_document, Error};

const SMALL_MAP: &str = r#"
<map width="2" height="2" tilewidth="32" tileheight="32">
  <layer name="Ground">
    <data>
      <tile gid="1"/><tile gid="0"/>
      <tile gid="2"/><tile gid="3"/>
    </data>
  </layer>
  <layer name="Props">
    <data>
      <tile gid="0"/><tile gid="0"/>
      <tile gid="0"/><tile gid="4"/>
    </data>
  </layer>
  <objectgroup name="Collision">
    <object x="0" y="32" width="64" height="32"/>
  </objectgroup>
</map>
"#;

#[test]
fn parse_reads_map_attributes() {
    let doc = parse_document(SMALL_MAP).expect("should parse");
    assert_eq!(doc.width, 2);
    assert_eq!(doc.height, 2);
    assert_eq!(doc.tile_size, 32);
}

#[test]
fn layers_enumerate_in_document_order() {
    let doc = parse_document(SMALL_MAP).unwrap();
    assert_eq!(doc.layers.len(), 2);
    assert_eq!(doc.layers[0].name, "Ground");
    assert_eq!(doc.layers[1].name, "Props");
    assert_eq!(doc.layers[0].gids, vec![1, 0, 2, 3]);
}

#[test]
fn collision_group_is_located_by_name() {
    let doc = parse_document(SMALL_MAP).unwrap();
    let collision = doc.collision.expect("collision group should be found");
    assert_eq!(collision.name, "Collision");
    assert_eq!(collision.objects.len(), 1);
    assert_eq!(collision.objects[0].x, 0);
    assert_eq!(collision.objects[0].y, 32);
    assert_eq!(collision.objects[0].width, 64);
    assert_eq!(collision.objects[0].height, 32);
}

#[test]
fn absent_collision_group_is_not_an_error() {
    let doc = parse_document(
        r#"<map width="1" height="1" tilewidth="8">
             <layer name="L"><data><tile gid="0"/></data></layer>
           </map>"#,
    )
    .unwrap();
    assert!(doc.collision.is_none());
}

#[test]
fn differently_named_object_groups_are_skipped() {
    let doc = parse_document(
        r#"<map width="1" height="1" tilewidth="8">
             <objectgroup name="Decoration">
               <object x="0" y="0" width="8" height="8"/>
             </objectgroup>
             <objectgroup name="Collision">
               <object x="8" y="8" width="8" height="8"/>
             </objectgroup>
           </map>"#,
    )
    .unwrap();
    let collision = doc.collision.expect("second group matches");
    assert_eq!(collision.objects[0].x, 8);
}

#[test]
fn missing_map_root_is_an_error() {
    let err = parse_document("<tileset/>").unwrap_err();
    assert!(matches!(err, Error::MissingElement("map")));
}

#[test]
fn missing_tilewidth_is_an_error() {
    let err = parse_document(r#"<map width="2" height="2"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute { ref attribute, .. } if attribute == "tilewidth"
    ));
}

#[test]
fn non_numeric_width_is_an_error() {
    let err = parse_document(r#"<map width="wide" height="2" tilewidth="8"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAttribute { ref value, .. } if value == "wide"
    ));
}

#[test]
fn zero_tilewidth_is_rejected() {
    let err = parse_document(r#"<map width="2" height="2" tilewidth="0"/>"#).unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidAttribute { ref attribute, .. } if attribute == "tilewidth"
    ));
}

#[test]
fn tile_without_gid_is_an_error() {
    let err = parse_document(
        r#"<map width="1" height="1" tilewidth="8">
             <layer name="L"><data><tile/></data></layer>
           </map>"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute { ref element, ref attribute }
            if element == "tile" && attribute == "gid"
    ));
}

#[test]
fn layer_without_data_is_an_error() {
    let err = parse_document(
        r#"<map width="1" height="1" tilewidth="8">
             <layer name="L"/>
           </map>"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MissingElement("data")));
}

#[test]
fn malformed_xml_is_an_error() {
    let err = parse_document("<map width=2>").unwrap_err();
    assert!(matches!(err, Error::Xml(_)));
}
