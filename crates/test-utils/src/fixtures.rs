//! Canned WFS GetCapabilities documents.

/// WFS 2.0 document with full service metadata and three feature types.
///
/// Layers, in order:
/// - `ns:Roads` / "Roads", two keywords, bbox 10.5 -20.25 15.0 -10.0
/// - `Rivers` / "Rivers", one keyword, bbox -180 -90 180 90
/// - `ns:Lakes` / "Lake Polygons", no keywords and no bbox
pub const WFS_2_0_CAPABILITIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:WFS_Capabilities version="2.0.0"
    xmlns:wfs="http://www.opengis.net/wfs/2.0"
    xmlns:ows="http://www.opengis.net/ows/1.1"
    xmlns:xlink="http://www.w3.org/1999/xlink">
  <ows:ServiceIdentification>
    <ows:Title>Hydrography &amp; Transport</ows:Title>
    <ows:Abstract>Roads, rivers and lakes.</ows:Abstract>
    <ows:Keywords>
      <ows:Keyword>WFS</ows:Keyword>
      <ows:Keyword>transport</ows:Keyword>
    </ows:Keywords>
    <ows:ServiceType>WFS</ows:ServiceType>
    <ows:ServiceTypeVersion>2.0.0</ows:ServiceTypeVersion>
    <ows:Fees>NONE</ows:Fees>
    <ows:AccessConstraints>NONE</ows:AccessConstraints>
  </ows:ServiceIdentification>
  <ows:ServiceProvider>
    <ows:ProviderName>Survey Office</ows:ProviderName>
    <ows:ServiceContact>
      <ows:IndividualName>Jo Smith</ows:IndividualName>
      <ows:PositionName>Data Manager</ows:PositionName>
      <ows:ContactInfo>
        <ows:Phone>
          <ows:Voice>+61 2 6200 0000</ows:Voice>
          <ows:Facsimile>+61 2 6200 0001</ows:Facsimile>
        </ows:Phone>
        <ows:Address>
          <ows:DeliveryPoint>1 Main Street</ows:DeliveryPoint>
          <ows:City>Canberra</ows:City>
          <ows:AdministrativeArea>ACT</ows:AdministrativeArea>
          <ows:PostalCode>2600</ows:PostalCode>
          <ows:Country>Australia</ows:Country>
          <ows:ElectronicMailAddress>data@example.org</ows:ElectronicMailAddress>
        </ows:Address>
      </ows:ContactInfo>
    </ows:ServiceContact>
  </ows:ServiceProvider>
  <wfs:FeatureTypeList>
    <wfs:FeatureType xmlns:ns="http://example.org/ns">
      <wfs:Name>ns:Roads</wfs:Name>
      <wfs:Title>Roads</wfs:Title>
      <wfs:Abstract>Sealed and unsealed roads.</wfs:Abstract>
      <ows:Keywords>
        <ows:Keyword>roads</ows:Keyword>
        <ows:Keyword>transport</ows:Keyword>
      </ows:Keywords>
      <wfs:DefaultCRS>urn:ogc:def:crs:EPSG::4326</wfs:DefaultCRS>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>10.5 -20.25</ows:LowerCorner>
        <ows:UpperCorner>15.0 -10.0</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </wfs:FeatureType>
    <wfs:FeatureType>
      <wfs:Name>Rivers</wfs:Name>
      <wfs:Title>Rivers</wfs:Title>
      <ows:Keywords>
        <ows:Keyword>water</ows:Keyword>
      </ows:Keywords>
      <wfs:DefaultCRS>urn:ogc:def:crs:EPSG::4326</wfs:DefaultCRS>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-180 -90</ows:LowerCorner>
        <ows:UpperCorner>180 90</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </wfs:FeatureType>
    <wfs:FeatureType xmlns:ns="http://example.org/ns">
      <wfs:Name>ns:Lakes</wfs:Name>
      <wfs:Title>Lake Polygons</wfs:Title>
    </wfs:FeatureType>
  </wfs:FeatureTypeList>
</wfs:WFS_Capabilities>
"#;

/// WFS 1.1 document with sparse metadata and a malformed corner.
pub const WFS_1_1_CAPABILITIES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WFS_Capabilities version="1.1.0"
    xmlns="http://www.opengis.net/wfs"
    xmlns:ows="http://www.opengis.net/ows">
  <ows:ServiceIdentification>
    <ows:Title>Legacy Server</ows:Title>
  </ows:ServiceIdentification>
  <FeatureTypeList>
    <FeatureType>
      <Name>topp:states</Name>
      <Title>USA Population</Title>
      <DefaultSRS>EPSG:4326</DefaultSRS>
      <ows:WGS84BoundingBox>
        <ows:LowerCorner>-124.73 24.96</ows:LowerCorner>
        <ows:UpperCorner>-66.97 not-a-number</ows:UpperCorner>
      </ows:WGS84BoundingBox>
    </FeatureType>
    <FeatureType>
      <Name>topp:tasmania_roads</Name>
      <Title>Tasmania roads</Title>
    </FeatureType>
  </FeatureTypeList>
</WFS_Capabilities>
"#;

/// Valid document exposing exactly one feature type.
pub const SINGLE_FEATURE_TYPE_CAPABILITIES: &str = r#"<?xml version="1.0"?>
<wfs:WFS_Capabilities version="2.0.0"
    xmlns:wfs="http://www.opengis.net/wfs/2.0"
    xmlns:ows="http://www.opengis.net/ows/1.1">
  <ows:ServiceIdentification>
    <ows:Title>One Layer</ows:Title>
  </ows:ServiceIdentification>
  <wfs:FeatureTypeList>
    <wfs:FeatureType>
      <wfs:Name>only</wfs:Name>
      <wfs:Title>Only</wfs:Title>
    </wfs:FeatureType>
  </wfs:FeatureTypeList>
</wfs:WFS_Capabilities>
"#;

/// An OWS exception report, which is XML but not a capabilities document.
pub const EXCEPTION_REPORT: &str = r#"<?xml version="1.0"?>
<ows:ExceptionReport version="2.0.0" xmlns:ows="http://www.opengis.net/ows/1.1">
  <ows:Exception exceptionCode="InvalidParameterValue" locator="service">
    <ows:ExceptionText>No service: ( WMS )</ows:ExceptionText>
  </ows:Exception>
</ows:ExceptionReport>
"#;

/// A body that is not XML at all.
pub const NOT_XML: &str = "<html><body>Bad gateway</p></html>";
