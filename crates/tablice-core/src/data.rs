//! National prefix table.
//!
//! Two-letter codes belong to cities with county rights (and a few large
//! counties); three-letter codes belong to rural counties. Army and
//! government services are grouped under their own leading letters.

use crate::types::{Region, Voivodeship};

pub(crate) static VOIVODESHIPS: &[Voivodeship] = &[
    Voivodeship::new(
        "dolnośląskie",
        'D',
        &[
            Region::new("Jelenia Góra", &["DJ"]),
            Region::new("Legnica", &["DL"]),
            Region::new("Wałbrzych", &["DB"]),
            Region::new("Wrocław", &["DW", "DX"]),
            Region::new("bolesławiecki", &["DBL"]),
            Region::new("dzierżoniowski", &["DDZ"]),
            Region::new("głogowski", &["DGL"]),
            Region::new("górowski", &["DGR"]),
            Region::new("jaworski", &["DJA"]),
            Region::new("jeleniogórski", &["DJE"]),
            Region::new("kamiennogórski", &["DKA"]),
            Region::new("kłodzki", &["DKL"]),
            Region::new("legnicki", &["DLE"]),
            Region::new("lubański", &["DLB"]),
            Region::new("lubiński", &["DLU"]),
            Region::new("lwówecki", &["DLW"]),
            Region::new("milicki", &["DMI"]),
            Region::new("oleśnicki", &["DOL"]),
            Region::new("oławski", &["DOA"]),
            Region::new("polkowicki", &["DPL"]),
            Region::new("strzeliński", &["DST"]),
            Region::new("średzki", &["DSR"]),
            Region::new("świdnicki", &["DSW"]),
            Region::new("trzebnicki", &["DTR"]),
            Region::new("wałbrzyski", &["DBA"]),
            Region::new("wołowski", &["DWL"]),
            Region::new("wrocławski", &["DWR"]),
            Region::new("ząbkowicki", &["DZA"]),
            Region::new("zgorzelecki", &["DZG"]),
            Region::new("złotoryjski", &["DZL"]),
        ],
    ),
    Voivodeship::new(
        "kujawsko-pomorskie",
        'C',
        &[
            Region::new("Bydgoszcz", &["CB"]),
            Region::new("Grudziądz", &["CG"]),
            Region::new("Toruń", &["CT"]),
            Region::new("Włocławek", &["CW"]),
            Region::new("aleksandrowski", &["CAL"]),
            Region::new("brodnicki", &["CBR"]),
            Region::new("bydgoski", &["CBY"]),
            Region::new("chełmiński", &["CCH"]),
            Region::new("golubsko-dobrzyński", &["CGD"]),
            Region::new("grudziądzki", &["CGR"]),
            Region::new("inowrocławski", &["CIN"]),
            Region::new("lipnowski", &["CLI"]),
            Region::new("mogileński", &["CMG"]),
            Region::new("nakielski", &["CNA"]),
            Region::new("radziejowski", &["CRA"]),
            Region::new("rypiński", &["CRY"]),
            Region::new("sępoleński", &["CSE"]),
            Region::new("świecki", &["CSW"]),
            Region::new("toruński", &["CTR"]),
            Region::new("tucholski", &["CTU"]),
            Region::new("wąbrzeski", &["CWA"]),
            Region::new("włocławski", &["CWL"]),
            Region::new("żniński", &["CZN"]),
        ],
    ),
    Voivodeship::new(
        "lubelskie",
        'L',
        &[
            Region::new("Biała Podlaska", &["LB"]),
            Region::new("Chełm", &["LC"]),
            Region::new("Lublin", &["LU"]),
            Region::new("Zamość", &["LZ"]),
            Region::new("bialski", &["LBI"]),
            Region::new("biłgorajski", &["LBL"]),
            Region::new("chełmski", &["LCH"]),
            Region::new("hrubieszowski", &["LHR"]),
            Region::new("janowski", &["LJA"]),
            Region::new("krasnostawski", &["LKS"]),
            Region::new("kraśnicki", &["LKR"]),
            Region::new("lubartowski", &["LLB"]),
            Region::new("lubelski", &["LUB"]),
            Region::new("łęczyński", &["LLE"]),
            Region::new("łukowski", &["LLU"]),
            Region::new("opolski", &["LOP"]),
            Region::new("parczewski", &["LPA"]),
            Region::new("puławski", &["LPU"]),
            Region::new("radzyński", &["LRA"]),
            Region::new("rycki", &["LRY"]),
            Region::new("świdnicki", &["LSW"]),
            Region::new("tomaszowski", &["LTM"]),
            Region::new("włodawski", &["LWL"]),
            Region::new("zamojski", &["LZA"]),
        ],
    ),
    Voivodeship::new(
        "lubuskie",
        'F',
        &[
            Region::new("Gorzów Wielkopolski", &["FG"]),
            Region::new("Zielona Góra", &["FZ"]),
            Region::new("gorzowski", &["FGW"]),
            Region::new("krośnieński", &["FKR"]),
            Region::new("międzyrzecki", &["FMI"]),
            Region::new("nowosolski", &["FNW"]),
            Region::new("słubicki", &["FSL"]),
            Region::new("strzelecko-drezdenecki", &["FSD"]),
            Region::new("sulęciński", &["FSU"]),
            Region::new("świebodziński", &["FSW"]),
            Region::new("wschowski", &["FWS"]),
            Region::new("zielonogórski", &["FZG"]),
            Region::new("żagański", &["FZA"]),
            Region::new("żarski", &["FZR"]),
        ],
    ),
    Voivodeship::new(
        "łódzkie",
        'E',
        &[
            Region::new("Łódź", &["EL"]),
            Region::new("Piotrków Trybunalski", &["EP"]),
            Region::new("Skierniewice", &["ES"]),
            Region::new("bełchatowski", &["EBE"]),
            Region::new("brzeziński", &["EBR"]),
            Region::new("kutnowski", &["EKU"]),
            Region::new("łaski", &["ELA"]),
            Region::new("łęczycki", &["ELE"]),
            Region::new("łowicki", &["ELC"]),
            Region::new("łódzki wschodni", &["ELW"]),
            Region::new("opoczyński", &["EOP"]),
            Region::new("pabianicki", &["EPA"]),
            Region::new("pajęczański", &["EPJ"]),
            Region::new("piotrkowski", &["EPI"]),
            Region::new("poddębicki", &["EPD"]),
            Region::new("radomszczański", &["ERA"]),
            Region::new("rawski", &["ERW"]),
            Region::new("sieradzki", &["ESI"]),
            Region::new("skierniewicki", &["ESK"]),
            Region::new("tomaszowski", &["ETM"]),
            Region::new("wieluński", &["EWI"]),
            Region::new("wieruszowski", &["EWE"]),
            Region::new("zduńskowolski", &["EZD"]),
            Region::new("zgierski", &["EZG"]),
        ],
    ),
    Voivodeship::new(
        "małopolskie",
        'K',
        &[
            Region::new("Kraków", &["KR", "KK"]),
            Region::new("Nowy Sącz", &["KN"]),
            Region::new("Tarnów", &["KT"]),
            Region::new("bocheński", &["KBC"]),
            Region::new("brzeski", &["KBR"]),
            Region::new("chrzanowski", &["KCH"]),
            Region::new("dąbrowski", &["KDA"]),
            Region::new("gorlicki", &["KGR"]),
            Region::new("krakowski", &["KRA"]),
            Region::new("limanowski", &["KLI"]),
            Region::new("miechowski", &["KMI"]),
            Region::new("myślenicki", &["KMY"]),
            Region::new("nowosądecki", &["KNS"]),
            Region::new("nowotarski", &["KNT"]),
            Region::new("olkuski", &["KOL"]),
            Region::new("oświęcimski", &["KOS"]),
            Region::new("proszowicki", &["KPR"]),
            Region::new("suski", &["KSU"]),
            Region::new("tarnowski", &["KTA"]),
            Region::new("tatrzański", &["KTT"]),
            Region::new("wadowicki", &["KWA"]),
            Region::new("wielicki", &["KWI"]),
        ],
    ),
    Voivodeship::new(
        "mazowieckie",
        'W',
        &[
            Region::new("Ostrołęka", &["WO"]),
            Region::new("Płock", &["WP"]),
            Region::new("Radom", &["WR"]),
            Region::new("Siedlce", &["WS"]),
            Region::new(
                "Warszawa",
                &[
                    "WA", "WB", "WD", "WE", "WF", "WH", "WI", "WJ", "WK", "WN", "WT", "WU", "WW",
                    "WX", "WY",
                ],
            ),
            Region::new("białobrzeski", &["WBR"]),
            Region::new("ciechanowski", &["WCI"]),
            Region::new("garwoliński", &["WG"]),
            Region::new("gostyniński", &["WGS"]),
            Region::new("grodziski", &["WGM"]),
            Region::new("grójecki", &["WGR"]),
            Region::new("kozienicki", &["WKZ"]),
            Region::new("legionowski", &["WL"]),
            Region::new("lipski", &["WLI"]),
            Region::new("łosicki", &["WLS"]),
            Region::new("makowski", &["WMA"]),
            Region::new("miński", &["WM"]),
            Region::new("mławski", &["WML"]),
            Region::new("nowodworski", &["WND"]),
            Region::new("ostrołęcki", &["WOS"]),
            Region::new("ostrowski", &["WOR"]),
            Region::new("otwocki", &["WOT"]),
            Region::new("piaseczyński", &["WPI"]),
            Region::new("płocki", &["WPL"]),
            Region::new("płoński", &["WPN"]),
            Region::new("pruszkowski", &["WPR"]),
            Region::new("przasnyski", &["WPZ"]),
            Region::new("przysuski", &["WPY"]),
            Region::new("pułtuski", &["WPU"]),
            Region::new("radomski", &["WRA"]),
            Region::new("siedlecki", &["WSI"]),
            Region::new("sierpecki", &["WSC"]),
            Region::new("sochaczewski", &["WSE"]),
            Region::new("sokołowski", &["WSK"]),
            Region::new("szydłowiecki", &["WSZ"]),
            Region::new("warszawski zachodni", &["WZ"]),
            Region::new("węgrowski", &["WWE"]),
            Region::new("wołomiński", &["WWL"]),
            Region::new("wyszkowski", &["WWY"]),
            Region::new("zwoleński", &["WZW"]),
            Region::new("żuromiński", &["WZU"]),
            Region::new("żyrardowski", &["WZY"]),
        ],
    ),
    Voivodeship::new(
        "opolskie",
        'O',
        &[
            Region::new("Opole", &["OP"]),
            Region::new("brzeski", &["OB"]),
            Region::new("głubczycki", &["OGL"]),
            Region::new("kędzierzyńsko-kozielski", &["OK"]),
            Region::new("kluczborski", &["OKL"]),
            Region::new("krapkowicki", &["OKR"]),
            Region::new("namysłowski", &["ONA"]),
            Region::new("nyski", &["ONY"]),
            Region::new("oleski", &["OOL"]),
            Region::new("opolski", &["OPO"]),
            Region::new("prudnicki", &["OPR"]),
            Region::new("strzelecki", &["OST"]),
        ],
    ),
    Voivodeship::new(
        "podkarpackie",
        'R',
        &[
            Region::new("Krosno", &["RK"]),
            Region::new("Przemyśl", &["RP"]),
            Region::new("Rzeszów", &["RZ"]),
            Region::new("Tarnobrzeg", &["RT"]),
            Region::new("bieszczadzki", &["RBI"]),
            Region::new("brzozowski", &["RBR"]),
            Region::new("dębicki", &["RDE"]),
            Region::new("jarosławski", &["RJA"]),
            Region::new("jasielski", &["RJS"]),
            Region::new("kolbuszowski", &["RKL"]),
            Region::new("krośnieński", &["RKR"]),
            Region::new("leski", &["RLS"]),
            Region::new("leżajski", &["RLE"]),
            Region::new("lubaczowski", &["RLU"]),
            Region::new("łańcucki", &["RLA"]),
            Region::new("mielecki", &["RMI"]),
            Region::new("niżański", &["RNI"]),
            Region::new("przemyski", &["RPZ"]),
            Region::new("przeworski", &["RPR"]),
            Region::new("ropczycko-sędziszowski", &["RRS"]),
            Region::new("rzeszowski", &["RZE"]),
            Region::new("sanocki", &["RSA"]),
            Region::new("stalowowolski", &["RST"]),
            Region::new("strzyżowski", &["RSR"]),
            Region::new("tarnobrzeski", &["RTA"]),
        ],
    ),
    Voivodeship::new(
        "podlaskie",
        'B',
        &[
            Region::new("Białystok", &["BI"]),
            Region::new("Łomża", &["BL"]),
            Region::new("Suwałki", &["BS"]),
            Region::new("augustowski", &["BAU"]),
            Region::new("białostocki", &["BIA"]),
            Region::new("bielski", &["BBI"]),
            Region::new("grajewski", &["BGR"]),
            Region::new("hajnowski", &["BHA"]),
            Region::new("kolneński", &["BKL"]),
            Region::new("łomżyński", &["BLM"]),
            Region::new("moniecki", &["BMN"]),
            Region::new("sejneński", &["BSE"]),
            Region::new("siemiatycki", &["BSI"]),
            Region::new("sokólski", &["BSK"]),
            Region::new("suwalski", &["BSU"]),
            Region::new("wysokomazowiecki", &["BWM"]),
            Region::new("zambrowski", &["BZA"]),
        ],
    ),
    Voivodeship::new(
        "pomorskie",
        'G',
        &[
            Region::new("Gdańsk", &["GD"]),
            Region::new("Gdynia", &["GA"]),
            Region::new("Słupsk", &["GS"]),
            Region::new("Sopot", &["GSP"]),
            Region::new("bytowski", &["GBY"]),
            Region::new("chojnicki", &["GCH"]),
            Region::new("człuchowski", &["GCZ"]),
            Region::new("gdański", &["GDA"]),
            Region::new("kartuski", &["GKA"]),
            Region::new("kościerski", &["GKS"]),
            Region::new("kwidzyński", &["GKW"]),
            Region::new("lęborski", &["GLE"]),
            Region::new("malborski", &["GMB"]),
            Region::new("nowodworski", &["GND"]),
            Region::new("pucki", &["GPU"]),
            Region::new("słupski", &["GSL"]),
            Region::new("starogardzki", &["GST"]),
            Region::new("sztumski", &["GSZ"]),
            Region::new("tczewski", &["GTC"]),
            Region::new("wejherowski", &["GWE"]),
        ],
    ),
    Voivodeship::new(
        "śląskie",
        'S',
        &[
            Region::new("Bielsko-Biała", &["SB"]),
            Region::new("Bytom", &["SY"]),
            Region::new("Chorzów", &["SH"]),
            Region::new("Częstochowa", &["SC"]),
            Region::new("Dąbrowa Górnicza", &["SD"]),
            Region::new("Gliwice", &["SG"]),
            Region::new("Jastrzębie-Zdrój", &["SJZ"]),
            Region::new("Jaworzno", &["SJ"]),
            Region::new("Katowice", &["SK"]),
            Region::new("Mysłowice", &["SM"]),
            Region::new("Piekary Śląskie", &["SPI"]),
            Region::new("Ruda Śląska", &["SL"]),
            Region::new("Rybnik", &["SR"]),
            Region::new("Siemianowice Śląskie", &["SI"]),
            Region::new("Sosnowiec", &["SO"]),
            Region::new("Świętochłowice", &["SW"]),
            Region::new("Tychy", &["ST"]),
            Region::new("Zabrze", &["SZ"]),
            Region::new("Żory", &["SZO"]),
            Region::new("będziński", &["SBE"]),
            Region::new("bielski", &["SBI"]),
            Region::new("bieruńsko-lędziński", &["SBL"]),
            Region::new("cieszyński", &["SCI"]),
            Region::new("częstochowski", &["SCZ"]),
            Region::new("gliwicki", &["SGL"]),
            Region::new("kłobucki", &["SKL"]),
            Region::new("lubliniecki", &["SLU"]),
            Region::new("mikołowski", &["SMI"]),
            Region::new("myszkowski", &["SMY"]),
            Region::new("pszczyński", &["SPS"]),
            Region::new("raciborski", &["SRC"]),
            Region::new("rybnicki", &["SRB"]),
            Region::new("tarnogórski", &["STA"]),
            Region::new("wodzisławski", &["SWD"]),
            Region::new("zawierciański", &["SZA"]),
            Region::new("żywiecki", &["SZY"]),
        ],
    ),
    Voivodeship::new(
        "świętokrzyskie",
        'T',
        &[
            Region::new("Kielce", &["TK"]),
            Region::new("buski", &["TBU"]),
            Region::new("jędrzejowski", &["TJE"]),
            Region::new("kazimierski", &["TKA"]),
            Region::new("kielecki", &["TKI"]),
            Region::new("konecki", &["TKN"]),
            Region::new("opatowski", &["TOP"]),
            Region::new("ostrowiecki", &["TOS"]),
            Region::new("pińczowski", &["TPI"]),
            Region::new("sandomierski", &["TSA"]),
            Region::new("skarżyski", &["TSK"]),
            Region::new("starachowicki", &["TST"]),
            Region::new("staszowski", &["TSZ"]),
            Region::new("włoszczowski", &["TLW"]),
        ],
    ),
    Voivodeship::new(
        "warmińsko-mazurskie",
        'N',
        &[
            Region::new("Elbląg", &["NE"]),
            Region::new("Olsztyn", &["NO"]),
            Region::new("bartoszycki", &["NBA"]),
            Region::new("braniewski", &["NBR"]),
            Region::new("działdowski", &["NDZ"]),
            Region::new("elbląski", &["NEB"]),
            Region::new("ełcki", &["NEL"]),
            Region::new("giżycki", &["NGI"]),
            Region::new("gołdapski", &["NGO"]),
            Region::new("iławski", &["NIL"]),
            Region::new("kętrzyński", &["NKE"]),
            Region::new("lidzbarski", &["NLI"]),
            Region::new("mrągowski", &["NMR"]),
            Region::new("nidzicki", &["NNI"]),
            Region::new("nowomiejski", &["NNM"]),
            Region::new("olecki", &["NOE"]),
            Region::new("olsztyński", &["NOL"]),
            Region::new("ostródzki", &["NOS"]),
            Region::new("piski", &["NPI"]),
            Region::new("szczycieński", &["NSZ"]),
            Region::new("węgorzewski", &["NWE"]),
        ],
    ),
    Voivodeship::new(
        "wielkopolskie",
        'P',
        &[
            Region::new("Kalisz", &["PK"]),
            Region::new("Konin", &["PN"]),
            Region::new("Leszno", &["PL"]),
            Region::new("Poznań", &["PO", "PY"]),
            Region::new("chodzieski", &["PCH"]),
            Region::new("czarnkowsko-trzcianecki", &["PCT"]),
            Region::new("gnieźnieński", &["PGN"]),
            Region::new("gostyński", &["PGS"]),
            Region::new("grodziski", &["PGO"]),
            Region::new("jarociński", &["PJA"]),
            Region::new("kaliski", &["PKA"]),
            Region::new("kępiński", &["PKE"]),
            Region::new("kolski", &["PKL"]),
            Region::new("koniński", &["PKN"]),
            Region::new("kościański", &["PKS"]),
            Region::new("krotoszyński", &["PKR"]),
            Region::new("leszczyński", &["PLE"]),
            Region::new("międzychodzki", &["PMI"]),
            Region::new("nowotomyski", &["PNT"]),
            Region::new("obornicki", &["POB"]),
            Region::new("ostrowski", &["POS"]),
            Region::new("ostrzeszowski", &["POT"]),
            Region::new("pilski", &["PP"]),
            Region::new("pleszewski", &["PPL"]),
            Region::new("poznański", &["PZ"]),
            Region::new("rawicki", &["PRA"]),
            Region::new("słupecki", &["PSL"]),
            Region::new("szamotulski", &["PSZ"]),
            Region::new("średzki", &["PSR"]),
            Region::new("śremski", &["PSE"]),
            Region::new("turecki", &["PTU"]),
            Region::new("wągrowiecki", &["PWA"]),
            Region::new("wolsztyński", &["PWL"]),
            Region::new("wrzesiński", &["PWR"]),
            Region::new("złotowski", &["PZL"]),
        ],
    ),
    Voivodeship::new(
        "zachodniopomorskie",
        'Z',
        &[
            Region::new("Koszalin", &["ZK"]),
            Region::new("Szczecin", &["ZS"]),
            Region::new("Świnoujście", &["ZSW"]),
            Region::new("białogardzki", &["ZBI"]),
            Region::new("choszczeński", &["ZCH"]),
            Region::new("drawski", &["ZDR"]),
            Region::new("goleniowski", &["ZGL"]),
            Region::new("gryficki", &["ZGY"]),
            Region::new("gryfiński", &["ZGR"]),
            Region::new("kamieński", &["ZKA"]),
            Region::new("kołobrzeski", &["ZKL"]),
            Region::new("koszaliński", &["ZKO"]),
            Region::new("łobeski", &["ZLO"]),
            Region::new("myśliborski", &["ZMY"]),
            Region::new("policki", &["ZPL"]),
            Region::new("pyrzycki", &["ZPY"]),
            Region::new("sławieński", &["ZSL"]),
            Region::new("stargardzki", &["ZST"]),
            Region::new("szczecinecki", &["ZSZ"]),
            Region::new("świdwiński", &["ZSD"]),
            Region::new("wałecki", &["ZWA"]),
        ],
    ),
    Voivodeship::new(
        "army",
        'U',
        &[Region::new(
            "army",
            &[
                "UA", "UB", "UC", "UD", "UE", "UF", "UG", "UH", "UI", "UJ", "UK", "UL", "UM", "UN",
                "UP", "UR", "US", "UT", "UW", "UX", "UY", "UZ",
            ],
        )],
    ),
    Voivodeship::new(
        "services",
        'H',
        &[
            Region::new("Agencja Bezpieczeństwa Wewnętrznego", &["HA"]),
            Region::new("Służba Ochrony Państwa", &["HB"]),
            Region::new("Centralne Biuro Antykorupcyjne", &["HK"]),
            Region::new("Krajowa Administracja Skarbowa", &["HC"]),
            Region::new(
                "Policja",
                &[
                    "HPA", "HPB", "HPC", "HPD", "HPE", "HPF", "HPG", "HPH", "HPJ", "HPK", "HPL",
                    "HPM", "HPN", "HPO", "HPP", "HPR", "HPS", "HPT", "HPU", "HPW", "HPZ",
                ],
            ),
            Region::new("Straż Graniczna", &["HWA", "HWK"]),
        ],
    ),
];
