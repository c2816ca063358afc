// Precomputed ziggurat partition for the unit-rate exponential density.
//
// 256 layers over f(x) = exp(-x). Layer 0 is the tail strip; layers 1..=255
// are rectangles of equal area V. The three tables are a fixed, shipped
// dataset: they are computed offline (high-precision arithmetic, rounded to
// the nearest f64) and never regenerated at runtime.
//
// Table invariant, checked by the tests below:
// - `EF` is strictly increasing and ends at exactly 1.0 (EF[k] = exp(-x_k)
//   for the layer boundaries x_0 = R > x_1 > ... > x_255 = 0).
// - For every layer b >= 1, the rectangle width recovered from `EW` times the
//   strip height from `EF` equals V: (EW[b] * 2^63) * (EF[b] - EF[b-1]) == V.
// - `EK[b]` is the fast-accept bound floor(2^63 * x_b / x_{b-1}) (for the
//   tail layer, floor(2^63 * R / Q)), so every fast-accepted draw lies inside
//   the rectangular core of its layer.
//
// Breaking any of these silently skews the sampled distribution; it does not
// crash. `exponential.rs` is the only consumer.

/// Right edge of the rectangular layers; the tail starts here.
pub(crate) const R: f64 = 7.69711747013105;



/// Fast-accept bounds per layer, compared against a signed 63-bit draw.
pub(crate) const EK: [i64; 256] = [
    8162862958009851756, 8317365004821266929, 8608587457533757308, 8747546414904112046,
    8830037661796714252, 8885094666497981005, 8924652222586789170, 8954554714978013639,
    8978014716828854387, 8996950217926806434, 9012579824174067425, 9025716384411535980,
    9036923732325503852, 9046605762814123598, 9055059702522883507, 9062509347116970945,
    9069126555852813105, 9075045585691908343, 9080372908245544257, 9085194091635817693,
    9089578725147155861, 9093584008437555304, 9097257410708403456, 9100638670155140121,
    9103761317625194391, 9106653851930256819, 9109340656600290550, 9111842722299704746,
    9114178221480881307, 9116362969487005694, 9118410797532468547, 9120333856667861033,
    9122142867232936052, 9123847324910810306, 9125455671974333063, 9126975440420643402,
    9128413372253482058, 9129775521074630644, 9131067338299545138, 9132293746655141388,
    9133459203103853018, 9134567752933577285, 9135623076432662370, 9136628529313677250,
    9137587177844972577, 9138501829484038253, 9139375059672991615, 9140209235347705300,
    9141006535623069884, 9141768970043749178, 9142498394729435202, 9143196526693604851,
    9143864956573184006, 9144505159971792554, 9145118507590137358, 9145706274292643454,
    9146269647238761191, 9146809733189904977, 9147327565088135128, 9147824107990052206,
    9148300264428575565, 9148756879266029745, 9149194744094020228, 9149614601228741837,
    9150017147344460369, 9150403036782800754, 9150772884571045320, 9151127269178795237,
    9151466735038993595, 9151791794856379827, 9152102931723883002, 9152400601065215320,
    9152685232419954371, 9152957231085666523, 9153216979630093263, 9153464839285070384,
    9153701151232653886, 9153926237792866369, 9154140403521536661, 9154343936225868655,
    9154537107904630082, 9154720175619187231, 9154893382301017807, 9155056957500802840,
    9155211118083722555, 9155356068875154025, 9155492003260584674, 9155619103743210399,
    9155737542462375987, 9155847481675734784, 9155949074207750988, 9156042463866938533,
    9156127785834022643, 9156205167023021689, 9156274726417075639, 9156336575380691716,
    9156390817949935923, 9156437551101969743, 9156476865005213059, 9156508843251306223,
    9156533563069945121, 9156551095527572117, 9156561505710822227, 9156564852895546851,
    9156561190702166424, 9156550567238037693, 9156533025227460526, 9156508602129892743,
    9156477330246888906, 9156439236818230033, 9156394344107665359, 9156342669478644272,
    9156284225460376054, 9156219019804516884, 9156147055532747294, 9156068330975468832,
    9155982839801815760, 9155890571041146030, 9155791509096145332, 9155685633747648535,
    9155572920151254140, 9155453338825779299, 9155326855633575340, 9155193431752696456,
    9155053023640887068, 9154905582991326253, 9154751056680040395, 9154589386704867652,
    9154420510115829897, 9154244358936739250, 9154060860077837040, 9153869935239232908,
    9153671500804880532, 9153465467726794046, 9153251741399175388, 9153030221522087403,
    9152800801954270294, 9152563370554659818, 9152317809012124150, 9152063992662892394,
    9151801790295101035, 9151531063939834897, 9151251668647986053, 9150963452252197419,
    9150666255113096855, 9150359909848962348, 9150044241047888610, 9149719064961449842,
    9149384189178771848, 9149039412279838697, 9148684523466763894, 9148319302171652985,
    9147943517639572809, 9147556928485021401, 9147159282220160828, 9146750314752932047,
    9146329749853014875, 9145897298583426223, 9145452658695364255, 9144995513983703546,
    9144525533600324851, 9144042371322220607, 9143545664771051700, 9143035034580539632,
    9142510083507758313, 9141970395484038086, 9141415534600807599, 9140845044025272958,
    9140258444840363509, 9139655234802854643, 9139034887013004443, 9138396848488406229,
    9137740538634055852, 9137065347599852541, 9136370634515885761, 9135655725594897198,
    9134919912090234322, 9134162448096416049, 9133382548178095907, 9132579384811715474,
    9131752085622469825, 9130899730397333226, 9130021347852789746, 9129115912133547938,
    9128182339015854492, 9127219481786016335, 9126226126761344662, 9125200988416890704,
    9124142704076985031, 9123049828125642263, 9121920825684260475, 9120754065698623105,
    9119547813369876049, 9118300221855757172, 9117009323158726464, 9115673018106577909,
    9114289065318366014, 9112855069033762429, 9111368465666927111, 9109826508926222896,
    9108226253318129106, 9106564535826925858, 9104837955530410691, 9103042850875206894,
    9101175274292076792, 9099230963780781107, 9097205311033859465, 9095093325597321527,
    9092889594481259843, 9090588236531886893, 9088182850754808799, 9085666457632919161,
    9083031432305412369, 9080269428259873854, 9077371289928083896, 9074326952256460714,
    9071125324929106742, 9067754158436080876, 9064199888577030655, 9060447455238410351,
    9056480090338860374, 9052279068646041297, 9047823413654964303, 9043089548783006306,
    9038050881645730639, 9032677305946931279, 9026934601293793952, 9020783705683672599,
    9014179828011887849, 9007071358024495815, 8999398517688768824, 8991091679529585124,
    8982069251953251206, 8972234995776472797, 8961474585289419633, 8949651153807400108,
    8936599456209604677, 8922118120902181322, 8905959220757275387, 8887814016419183362,
    8867293129541508716, 8843898435871603462, 8816982352148887667, 8785687406231794429,
    8748854008138861828, 8704875095105002883, 8651458309292238861, 8585219286399829806,
    8500948185393581711, 8390198088981401569, 8238337428567649906, 8017709005563622441,
    7669309967995943763, 7042457982574019755, 5617518561624198115, 0,
];

/// Per-layer scale factors: x = a * EW[b] maps a 63-bit draw onto the layer
/// width. EW[0] is the tail scale Q / 2^63; EW[b] = x_{b-1} / 2^63 otherwise.
pub(crate) const EW: [f64; 256] = [
    9.429433655477718e-19, 8.345231482992214e-19, 7.5254837402657195e-19, 7.023872037196642e-19,
    6.661516678739188e-19, 6.377433646058634e-19, 6.143534213747614e-19, 5.944561929864168e-19,
    5.771306290675882e-19, 5.617779767093097e-19, 5.479870561206211e-19, 5.354632845955766e-19,
    5.239883766710959e-19, 5.133960744162378e-19, 5.035568192263753e-19, 4.943676828265781e-19,
    4.857455308781191e-19, 4.776222487687705e-19, 4.699413254716053e-19, 4.626553567639152e-19,
    4.557241860069801e-19, 4.49113496572845e-19, 4.427937303286948e-19, 4.367392455331965e-19,
    4.309276532261787e-19, 4.2533928854433125e-19, 4.1995678531908894e-19, 4.147647306469126e-19,
    4.0974938203841786e-19, 4.0489843401278365e-19, 4.002008241116272e-19, 3.9564657060122785e-19,
    3.912266358453654e-19, 3.869328106237085e-19, 3.8275761565541298e-19, 3.7869421734452102e-19,
    3.7473635535050915e-19, 3.708782800457885e-19, 3.6711469828283755e-19, 3.6344072617970774e-19,
    3.598518478609005e-19, 3.563438792738811e-19, 3.5291293634951764e-19, 3.495554068949489e-19,
    3.462679257055461e-19, 3.430473524631816e-19, 3.398907520544377e-19, 3.367953769974047e-19,
    3.33758651711488e-19, 3.3077815840288136e-19, 3.27851624370434e-19, 3.249769105636398e-19,
    3.221520012472933e-19, 3.1937499464670317e-19, 3.1664409446381364e-19, 3.1395760216863255e-19,
    3.1131390998239386e-19, 3.0871149447920954e-19, 3.0614891074186163e-19, 3.0362478701506507e-19,
    3.011378198061826e-19, 2.9868676938914657e-19, 2.962704556723636e-19, 2.938877543957635e-19,
    2.91537593625981e-19, 2.8921895052201813e-19, 2.869308483466825e-19, 2.846723537016888e-19,
    2.8244257396660113e-19, 2.802406549238103e-19, 2.7806577855353263e-19, 2.7591716098439972e-19,
    2.737940505866195e-19, 2.71695726195941e-19, 2.696214954577751e-19, 2.6757069328181785e-19,
    2.6554268039841978e-19, 2.635368420087392e-19, 2.61552586521438e-19, 2.595893443693208e-19,
    2.5764656689989676e-19, 2.557237253343676e-19, 2.5382030979001435e-19, 2.5193582836137997e-19,
    2.500698062560323e-19, 2.4822178498103635e-19, 2.463913215765837e-19, 2.4457798789351143e-19,
    2.4278136991170427e-19, 2.4100106709661023e-19, 2.3923669179131545e-19, 2.3748786864182187e-19,
    2.3575423405334895e-19, 2.3403543567564683e-19, 2.323311319154567e-19, 2.30640991474392e-19,
    2.289646929106404e-19, 2.2730192422300143e-19, 2.256523824558802e-19, 2.240157733239562e-19,
    2.223918108553341e-19, 2.2078021705206775e-19, 2.191807215670223e-19, 2.175930613961114e-19,
    2.1601698058500937e-19, 2.144522299494991e-19, 2.1289856680867032e-19, 2.1135575473023484e-19,
    2.098235632872718e-19, 2.0830176782575968e-19, 2.0679014924229257e-19, 2.052884937714153e-19,
    2.0379659278204687e-19, 2.0231424258249385e-19, 2.0084124423358573e-19, 1.9937740336949112e-19,
    1.9792253002580061e-19, 1.964764384744858e-19, 1.9503894706536544e-19, 1.9360987807373233e-19,
    1.9218905755381224e-19, 1.9077631519774503e-19, 1.8937148419979487e-19, 1.879744011255121e-19,
    1.8658490578558365e-19, 1.8520284111412273e-19, 1.8382805305116133e-19, 1.8246039042912038e-19,
    1.810997048630439e-19, 1.7974585064439334e-19, 1.7839868463820823e-19, 1.7705806618344742e-19,
    1.7572385699633435e-19, 1.743959210765364e-19, 1.7307412461601626e-19, 1.7175833591039955e-19,
    1.704484252727084e-19, 1.6914426494931722e-19, 1.6784572903799137e-19, 1.66552693407874e-19,
    1.6526503562129124e-19, 1.6398263485724891e-19, 1.6270537183649825e-19, 1.6143312874805048e-19,
    1.6016578917702324e-19, 1.5890323803370415e-19, 1.5764536148371862e-19, 1.5639204687919109e-19,
    1.5514318269078947e-19, 1.5389865844054454e-19, 1.526583646353357e-19, 1.5142219270093527e-19,
    1.501900349165036e-19, 1.4896178434942632e-19, 1.477373347903847e-19, 1.4651658068854853e-19,
    1.452994170867799e-19, 1.4408573955673356e-19, 1.4287544413373786e-19, 1.4166842725133669e-19,
    1.4046458567537013e-19, 1.3926381643746733e-19, 1.3806601676782082e-19, 1.368710840271066e-19,
    1.3567891563740859e-19, 1.3448940901200012e-19, 1.333024614838279e-19, 1.3211797023253667e-19,
    1.3093583220986323e-19, 1.297559440632208e-19, 1.2857820205728248e-19, 1.274025019933622e-19,
    1.2622873912637886e-19, 1.2505680807917474e-19, 1.2388660275394507e-19, 1.2271801624051743e-19,
    1.215509407212024e-19, 1.2038526737191555e-19, 1.1922088625924865e-19, 1.1805768623314312e-19,
    1.1689555481479152e-19, 1.1573437807936225e-19, 1.1457404053310994e-19, 1.1341442498439632e-19,
    1.1225541240810638e-19, 1.110968818028989e-19, 1.0993871004068042e-19, 1.0878077170763647e-19,
    1.0762293893609161e-19, 1.0646508122640141e-19, 1.053070652580028e-19, 1.0414875468866355e-19,
    1.029900099408766e-19, 1.0183068797423716e-19, 1.0067064204252168e-19, 9.950972143405216e-20,
    9.83477711937788e-20, 9.71846318253425e-20, 9.602013897118663e-20, 9.485412306856954e-20,
    9.368640897908202e-20, 9.251681558899366e-20, 9.13451553774329e-20, 9.01712339490409e-20,
    8.899484952732333e-20, 8.781579240444685e-20, 8.663384434267824e-20, 8.544877792203303e-20,
    8.426035582796985e-20, 8.30683300721223e-20, 8.187244113807753e-20, 8.067241704306678e-20,
    7.946797230509533e-20, 7.825880680347123e-20, 7.704460451884561e-20, 7.582503213669774e-20,
    7.459973749561353e-20, 7.336834785863016e-20, 7.213046798224406e-20, 7.088567795326805e-20,
    6.963353075840472e-20, 6.837354954496026e-20, 6.710522452327942e-20, 6.582800945188207e-20,
    6.454131763446685e-20, 6.32445173433217e-20, 6.193692656545974e-20, 6.061780694495306e-20,
    5.928635676608574e-20, 5.794170278524358e-20, 5.65828906723903e-20, 5.520887376210612e-20,
    5.381849973471772e-20, 5.241049474334172e-20, 5.0983444363209685e-20, 4.9535770551788545e-20,
    4.806570355203089e-20, 4.657124731703746e-20, 4.5050136537921744e-20, 4.349978264924191e-20,
    4.191720516057154e-20, 4.029894314624948e-20, 3.8640939434546424e-20, 3.693838649286767e-20,
    3.5185517370453644e-20, 3.3375315822119405e-20, 3.149910405113648e-20, 2.954593877266975e-20,
    2.7501694865212425e-20, 2.5347614963973577e-20, 2.30578913851869e-20, 2.059536239711413e-20,
    1.7903172712145943e-20, 1.4886635862824378e-20, 1.1366613766300028e-20, 6.922865472612715e-21,
];

/// Cumulative density at the layer boundaries: EF[k] = exp(-x_k).
pub(crate) const EF: [f64; 256] = [
    0.00045413435384149677, 0.0009672692823271745, 0.0015362997803015724, 0.0021459677437189063,
    0.002788798793574076, 0.003460264777836904, 0.004157295120833795, 0.004877655983542392,
    0.005619642207205483, 0.006381905937319179, 0.007163353183634984, 0.00796307743801704,
    0.008780314985808975, 0.00961441364250221, 0.010464810181029979, 0.011331013597834597,
    0.012212592426255381, 0.013109164931254991, 0.014020391403181938, 0.014945968011691148,
    0.015885621839973163, 0.016839106826039948, 0.01780620041091136, 0.01878670074469603,
    0.019780424338009743, 0.020787204072578117, 0.02180688750428358, 0.02283933540638524,
    0.02388442051155817, 0.024942026419731783, 0.026012046645134217, 0.0270943837809558,
    0.028188948763978636, 0.029295660224637393, 0.030414443910466604, 0.03154523217289361,
    0.032687963508959535, 0.03384258215087433, 0.03500903769739741, 0.03618728478193142,
    0.03737728277295936, 0.03857899550307486, 0.039792391023374125, 0.04101744138041482,
    0.042254122413316234, 0.04350241356888818, 0.04476229773294328, 0.04603376107617517,
    0.04731679291318155, 0.0486113855733795, 0.04991753428270637, 0.05123523705512628,
    0.05256449459307169, 0.05390531019604609, 0.05525768967669704, 0.05662164128374288,
    0.05799717563120066, 0.059384305633420266, 0.06078304644547963, 0.062193415408540995,
    0.06361543199980733, 0.06504911778675375, 0.06649449638533977, 0.0679515934219366,
    0.06942043649872875, 0.07090105516237183, 0.07239348087570874, 0.07389774699236475,
    0.07541388873405841, 0.0769419431704805, 0.07848194920160642, 0.0800339475423199,
    0.08159798070923742, 0.08317409300963238, 0.08476233053236812, 0.08636274114075691,
    0.08797537446727022, 0.08960028191003286, 0.09123751663104016, 0.09288713355604354,
    0.09454918937605586, 0.0962237425504328, 0.0979108533114922, 0.09961058367063713,
    0.10132299742595363, 0.10304816017125772, 0.10478613930657017, 0.10653700405000166,
    0.1083008254510338, 0.11007767640518538, 0.1118676316700563, 0.11367076788274431,
    0.11548716357863353, 0.11731689921155557, 0.11916005717532768, 0.12101672182667483,
    0.12288697950954514, 0.12477091858083096, 0.12666862943751067, 0.12858020454522817,
    0.13050573846833077, 0.13244532790138752, 0.13439907170221363, 0.13636707092642886,
    0.1383494288635802, 0.14034625107486245, 0.1423576454324722, 0.14438372216063478,
    0.14642459387834494, 0.1484803756438668, 0.1505511850010399, 0.15263714202744286,
    0.15473836938446808, 0.15685499236936523, 0.1589871389693142, 0.16113493991759203,
    0.16329852875190182, 0.165478041874936, 0.1676736186172502, 0.16988540130252766,
    0.17211353531532006, 0.1743581691713535, 0.17661945459049488, 0.1788975465724783,
    0.1811926034754963, 0.18350478709776746, 0.1858342627621971, 0.1881811994042543,
    0.1905457696631954, 0.19292814997677132, 0.19532852067956322, 0.19774706610509887,
    0.20018397469191127, 0.20263943909370902, 0.2051136562938377, 0.20760682772422204,
    0.21011915938898826, 0.21265086199297828, 0.21520215107537868, 0.21777324714870053,
    0.2203643758433595, 0.22297576805812017, 0.22560766011668407, 0.2282602939307167,
    0.2309339171696274, 0.23362878343743335, 0.23634515245705964, 0.23908329026244918,
    0.24184346939887721, 0.2446259691318921, 0.24743107566532763, 0.2502590823688623,
    0.25311029001562946, 0.2559850070304154, 0.25888354974901623, 0.2618062426893629,
    0.2647534188350622, 0.2677254199320448, 0.27072259679906, 0.27374530965280297,
    0.27679392844851736, 0.27986883323697287, 0.28297041453878075, 0.2860990737370768,
    0.28925522348967775, 0.2924392881618926, 0.2956517042812612, 0.2988929210155818,
    0.3021634006756935, 0.30546361924459026, 0.3087940669345602, 0.31215524877417955,
    0.31554768522712895, 0.31897191284495724, 0.3224284849560891, 0.3259179723935562,
    0.3294409642641363, 0.332998068761809, 0.33658991402867755, 0.34021714906678,
    0.3438804447045024, 0.347580494621637, 0.35131801643748334, 0.35509375286678746,
    0.3589084729487498, 0.3627629733548178, 0.36665807978151416, 0.370594648435146,
    0.37457356761590216, 0.3785957594095808, 0.38266218149600983, 0.38677382908413765,
    0.3909317369847971, 0.39513698183329016, 0.3993906844752311, 0.4036940125305303,
    0.4080481831520324, 0.4124544659971612, 0.4169141864330029, 0.4214287289976166,
    0.42599954114303434, 0.43062813728845883, 0.4353161032156366, 0.4400651008423539,
    0.4448768734145485, 0.449753251162755, 0.45469615747461545, 0.4597076156421377,
    0.4647897562504262, 0.46994482528396, 0.4751751930373774, 0.4804833639304542,
    0.4858719873418849, 0.49134386959403253, 0.49690198724154955, 0.5025495018413477,
    0.5082897764106429, 0.5141263938147486, 0.5200631773682336, 0.5261042139836197,
    0.5322538802630432, 0.5385168720028619, 0.5448982376724396, 0.5514034165406413,
    0.5580382822625874, 0.5648091929124002, 0.5717230486648258, 0.578787358602845,
    0.586010318477268, 0.5934009016917334, 0.6009689663652322, 0.608725382079622,
    0.6166821809152077, 0.6248527387036659, 0.6332519942143661, 0.6418967164272661,
    0.650805833414571, 0.6600008410789997, 0.6695063167319247, 0.6793505722647654,
    0.689566496117078, 0.7001926550827882, 0.711274760805076, 0.722867659593572,
    0.7350380924314235, 0.7478686219851951, 0.7614633888498963, 0.7759568520401156,
    0.7915276369724956, 0.8084216515230084, 0.8269932966430503, 0.8477855006239896,
    0.8717043323812036, 0.9004699299257464, 0.9381436808621746, 1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    const TWO63: f64 = 9_223_372_036_854_775_808.0;

    /// Common layer area (also the tail strip area).
    const V: f64 = 0.003949659822581557;

    /// Width of the tail strip: V / exp(-R).
    const Q: f64 = 8.69711747013105;

    #[test]
    fn ef_is_strictly_increasing_and_closes_at_one() {
        for b in 1..256 {
            assert!(EF[b] > EF[b - 1], "EF not increasing at {b}");
        }
        assert_eq!(EF[255], 1.0);
        // EF[0] is exp(-x_0) with x_0 = R.
        assert!((EF[0] - (-R).exp()).abs() < 1e-15 * EF[0].max(1e-6));
    }

    #[test]
    fn layer_areas_match_v() {
        // Recover x_{b-1} from EW[b] and check each rectangle has area V.
        for b in 1..256 {
            let width = EW[b] * TWO63;
            let area = width * (EF[b] - EF[b - 1]);
            assert!((area - V).abs() < 1e-12, "layer {b} area {area} != {V}");
        }
        // Tail strip: width Q, height exp(-R).
        let tail = Q * (-R).exp();
        assert!((tail - V).abs() < 1e-12);
    }

    #[test]
    fn ek_bounds_are_consistent() {
        // Tail layer: fast-accepted draws land below R.
        assert!((EK[0] as f64) * EW[0] <= R + 1e-9);
        for b in 1..256 {
            assert!(EK[b] >= 0);
            // Accepted draws stay inside the layer core x <= x_b, where
            // x_b = EW[b+1] * 2^63 (for b < 255; x_255 = 0 and EK[255] = 0).
            if b < 255 {
                let x_b = EW[b + 1] * TWO63;
                assert!((EK[b] as f64) * EW[b] <= x_b + 1e-9);
            }
        }
        assert_eq!(EK[255], 0);
    }

    #[test]
    fn scales_are_positive_and_ordered() {
        for b in 0..256 {
            assert!(EW[b] > 0.0);
        }
        // Tail scale covers the widest span; rectangle widths shrink inward.
        assert!(EW[0] > EW[1]);
        for b in 2..256 {
            assert!(EW[b] < EW[b - 1], "EW not decreasing at {b}");
        }
    }
}
